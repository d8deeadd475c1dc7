use crate::state::CurrentView;
use web_sys::window;

/// The title shown in the browser tab for each panel.
pub fn page_title_for(view: CurrentView) -> &'static str {
	match view {
		CurrentView::Signup => "Create Account | Sign-form",
		CurrentView::Users => "Registered Users | Sign-form",
	}
}

/// Sets the document title, silently doing nothing when the browser
/// context is unavailable.
pub fn set_page_title(new_title: &str) {
	let document = window().and_then(|window| window.document());
	if let Some(document) = document {
		document.set_title(new_title);
	}
}
