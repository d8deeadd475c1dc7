use crate::components::navigation::Navigation;
use crate::page_utils::{page_title_for, set_page_title};
use crate::pages::register::RegistrationView;
use crate::pages::users::RegisteredUsersView;
use crate::state::{CurrentView, DataSignals};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &DataSignals = use_context(ctx);

	create_effect(ctx, move || {
		let current_view = *data.current_view.get();
		log::debug!("Displaying the {:?} panel", current_view);
		set_page_title(page_title_for(current_view));
	});

	let signup_button_class_signal = create_memo(ctx, move || {
		if *data.current_view.get() == CurrentView::Signup {
			"view_toggle_button active"
		} else {
			"view_toggle_button"
		}
	});
	let users_button_class_signal = create_memo(ctx, move || {
		if *data.current_view.get() == CurrentView::Users {
			"view_toggle_button active"
		} else {
			"view_toggle_button"
		}
	});
	let users_button_label_signal = create_memo(ctx, move || format!("Users ({})", data.users.get().len()));

	let show_signup_handler = move |_event: WebEvent| {
		let data: &DataSignals = use_context(ctx);
		data.current_view.set(CurrentView::Signup);
	};
	let show_users_handler = move |_event: WebEvent| {
		let data: &DataSignals = use_context(ctx);
		data.current_view.set(CurrentView::Users);
	};

	view! {
		ctx,
		Navigation
		main(class="main_content") {
			div(class="view_toggle_container") {
				div(class="view_toggle") {
					button(class=*signup_button_class_signal.get(), on:click=show_signup_handler) {
						"Sign Up"
					}
					button(class=*users_button_class_signal.get(), on:click=show_users_handler) {
						(users_button_label_signal.get())
					}
				}
			}
			(match *data.current_view.get() {
				CurrentView::Signup => view! { ctx, RegistrationView },
				CurrentView::Users => view! { ctx, RegisteredUsersView },
			})
		}
		footer(class="footer") {
			div(class="footer_content") {
				p { "© All rights reserved." }
			}
		}
	}
}
