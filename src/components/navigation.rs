// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// The bar across the top of the page. The links are static anchors; the
/// only behavior is the narrow-viewport menu toggle.
#[component]
pub fn Navigation<G: Html>(ctx: Scope<'_>) -> View<G> {
	let menu_open_signal = create_signal(ctx, false);

	let toggle_menu_handler = move |_event: WebEvent| {
		let menu_open = *menu_open_signal.get();
		menu_open_signal.set(!menu_open);
	};

	view! {
		ctx,
		nav(class="navigation") {
			div(class="nav_content") {
				div(class="nav_logo") { "Sign-form" }
				div(class="nav_links_desktop") {
					a(href="#home") { "Home" }
					a(href="#about") { "About" }
					a(href="#contact") { "Contact" }
				}
				button(class="mobile_menu_button", on:click=toggle_menu_handler) {
					(if *menu_open_signal.get() {
						view! { ctx, img(src="images/close.png") }
					} else {
						view! { ctx, img(src="images/menu.png") }
					})
				}
			}
			(if *menu_open_signal.get() {
				view! {
					ctx,
					div(class="nav_links_mobile") {
						a(href="#home") { "Home" }
						a(href="#about") { "About" }
						a(href="#contact") { "Contact" }
					}
				}
			} else {
				view! { ctx, }
			})
		}
	}
}
