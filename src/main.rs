use sycamore::prelude::*;

mod app;
mod components;
mod form;
mod page_utils;
mod pages;
mod state;
mod validation;

use app::App;
use state::DataSignals;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	log::debug!("Starting the sign-form application");

	sycamore::render(|ctx| {
		provide_context(ctx, DataSignals::new());
		view! { ctx, App }
	});
}
