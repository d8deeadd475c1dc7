use crate::state::RegisteredUser;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct UserCardProps {
	user: RegisteredUser,
}

/// One card in the registered-users grid.
#[component]
pub fn UserCard<G: Html>(ctx: Scope<'_>, props: UserCardProps) -> View<G> {
	view! {
		ctx,
		div(class="user_card") {
			div(class="user_card_header") {
				div(class="user_card_avatar") {
					img(src="images/user.png")
				}
				div(class="user_card_info") {
					h3 { (props.user.full_name) }
					p {
						img(class="user_card_email_icon", src="images/email.png")
						(props.user.email)
					}
				}
			}
			div(class="user_card_footer") {
				img(class="user_card_badge_icon", src="images/check.png")
				"Active User"
			}
		}
	}
}
