use crate::components::user_card::UserCard;
use crate::state::{CurrentView, DataSignals};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegisteredUsersView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &DataSignals = use_context(ctx);
	let users_signal = create_memo(ctx, move || (*data.users.get()).clone());

	let empty_state_handler = move |_event: WebEvent| {
		let data: &DataSignals = use_context(ctx);
		data.current_view.set(CurrentView::Signup);
	};

	view! {
		ctx,
		h2(class="page_title") { "Registered Users" }
		(if users_signal.get().is_empty() {
			view! {
				ctx,
				div(class="empty_state") {
					img(class="empty_state_icon", src="images/user.png")
					p { "No users registered yet" }
					button(class="empty_state_button", on:click=empty_state_handler) {
						"Create your first account →"
					}
				}
			}
		} else {
			view! {
				ctx,
				div(class="users_grid") {
					Indexed(
						iterable=users_signal,
						view=|ctx, user| view! {
							ctx,
							UserCard(user=user)
						}
					)
				}
			}
		})
	}
}
