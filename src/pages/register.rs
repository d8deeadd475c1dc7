use crate::form::{evaluate_submission, SubmitOutcome, SUBMISSION_DELAY_MS};
use crate::state::DataSignals;
use gloo_timers::future::TimeoutFuture;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Dismisses a field's message as soon as the field is edited. The new
/// value is not re-checked; the next submit attempt re-validates
/// everything.
fn clear_error_on_edit<'a>(
	ctx: Scope<'a>,
	field_signal: &'a RcSignal<String>,
	error_signal: &'a RcSignal<Option<&'static str>>,
) {
	let mut initial_read_done = false;
	create_effect(ctx, move || {
		let _ = field_signal.get();
		if !initial_read_done {
			initial_read_done = true;
			return;
		}
		if error_signal.get_untracked().is_some() {
			error_signal.set(None);
		}
	});
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &DataSignals = use_context(ctx);
	let form = &data.registration;

	let full_name_signal = &form.full_name;
	let email_signal = &form.email;
	let password_signal = &form.password;
	let full_name_error_signal = &form.full_name_error;
	let email_error_signal = &form.email_error;
	let password_error_signal = &form.password_error;
	let submitting_signal = &form.submitting;

	clear_error_on_edit(ctx, full_name_signal, full_name_error_signal);
	clear_error_on_edit(ctx, email_signal, email_error_signal);
	clear_error_on_edit(ctx, password_signal, password_error_signal);

	let full_name_class_signal = create_memo(ctx, move || {
		if full_name_error_signal.get().is_some() {
			"form_input error"
		} else {
			"form_input"
		}
	});
	let email_class_signal = create_memo(ctx, move || {
		if email_error_signal.get().is_some() {
			"form_input error"
		} else {
			"form_input"
		}
	});
	let password_class_signal = create_memo(ctx, move || {
		if password_error_signal.get().is_some() {
			"form_input error"
		} else {
			"form_input"
		}
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let data: &DataSignals = use_context(ctx);
		let fields = data.registration.fields();
		match evaluate_submission(fields, *data.registration.submitting.get()) {
			SubmitOutcome::InFlight => (),
			SubmitOutcome::Rejected(errors) => data.registration.set_errors(errors),
			SubmitOutcome::Accepted(accepted_fields) => {
				data.registration.submitting.set(true);
				log::debug!(
					"Submission accepted for {}; simulating the acceptance delay",
					accepted_fields.email
				);

				// Detached from this view's scope: a panel switch while the
				// delay is pending must not cancel the acceptance.
				spawn_local({
					let data = data.clone();
					async move {
						TimeoutFuture::new(SUBMISSION_DELAY_MS).await;
						data.complete_registration(accepted_fields);
					}
				});
			}
		}
	};

	view! {
		ctx,
		div(id="signup_form_container") {
			div(class="form_header") {
				h2 { "Create Account" }
				p { "Join us today and get started!" }
			}
			form(id="signup_form", on:submit=form_submission_handler) {
				div(class="input_with_message") {
					label(for="signup_full_name") { "Full Name" }
					div(class="input_wrapper") {
						img(class="input_icon", src="images/user.png")
						input(
							id="signup_full_name",
							type="text",
							class=*full_name_class_signal.get(),
							bind:value=full_name_signal,
							placeholder="Enter your full name",
							disabled=*submitting_signal.get()
						)
					}
					(if let Some(message) = *full_name_error_signal.get() {
						view! {
							ctx,
							span(class="input_error signup_field_error") { (message) }
						}
					} else {
						view! { ctx, }
					})
				}
				div(class="input_with_message") {
					label(for="signup_email") { "Email Address" }
					div(class="input_wrapper") {
						img(class="input_icon", src="images/email.png")
						input(
							id="signup_email",
							type="email",
							class=*email_class_signal.get(),
							bind:value=email_signal,
							placeholder="Enter your email",
							disabled=*submitting_signal.get()
						)
					}
					(if let Some(message) = *email_error_signal.get() {
						view! {
							ctx,
							span(class="input_error signup_field_error") { (message) }
						}
					} else {
						view! { ctx, }
					})
				}
				div(class="input_with_message") {
					label(for="signup_password") { "Password" }
					div(class="input_wrapper") {
						img(class="input_icon", src="images/lock.png")
						input(
							id="signup_password",
							type="password",
							class=*password_class_signal.get(),
							bind:value=password_signal,
							placeholder="Create a password",
							disabled=*submitting_signal.get()
						)
					}
					(if let Some(message) = *password_error_signal.get() {
						view! {
							ctx,
							span(class="input_error signup_field_error") { (message) }
						}
					} else {
						view! { ctx, }
					})
				}
				button(id="signup_submit", type="submit", disabled=*submitting_signal.get()) {
					(if *submitting_signal.get() {
						view! {
							ctx,
							div(class="submit_button_progress") {
								div(class="spinner")
								"Creating Account..."
							}
						}
					} else {
						view! { ctx, "Sign Up" }
					})
				}
			}
			p(class="form_footer_text") {
				"Already have an account? "
				a(href="#login") { "Sign in" }
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::RegistrationFormSignals;
	use crate::validation::{EMAIL_INVALID_MESSAGE, FULL_NAME_REQUIRED_MESSAGE};
	use sycamore::reactive::{create_ref, create_scope_immediate};

	#[test]
	fn editing_a_field_dismisses_only_that_fields_message() {
		create_scope_immediate(|ctx| {
			let form = create_ref(ctx, RegistrationFormSignals::new());
			form.full_name_error.set(Some(FULL_NAME_REQUIRED_MESSAGE));
			form.email_error.set(Some(EMAIL_INVALID_MESSAGE));
			clear_error_on_edit(ctx, &form.full_name, &form.full_name_error);

			form.full_name.set(String::from("Jane Doe"));

			assert_eq!(*form.full_name_error.get(), None);
			assert_eq!(*form.email_error.get(), Some(EMAIL_INVALID_MESSAGE));
		});
	}

	#[test]
	fn wiring_up_the_dismissal_does_not_touch_existing_messages() {
		create_scope_immediate(|ctx| {
			let form = create_ref(ctx, RegistrationFormSignals::new());
			form.email_error.set(Some(EMAIL_INVALID_MESSAGE));

			clear_error_on_edit(ctx, &form.email, &form.email_error);

			assert_eq!(*form.email_error.get(), Some(EMAIL_INVALID_MESSAGE));
		});
	}

	#[test]
	fn dismissal_is_optimistic_and_does_not_revalidate() {
		create_scope_immediate(|ctx| {
			let form = create_ref(ctx, RegistrationFormSignals::new());
			form.email.set(String::from("jane@example"));
			form.email_error.set(Some(EMAIL_INVALID_MESSAGE));
			clear_error_on_edit(ctx, &form.email, &form.email_error);

			// Still not an address, but the message goes away until the
			// next submit attempt.
			form.email.set(String::from("jane@exampl"));

			assert_eq!(*form.email_error.get(), None);
		});
	}
}
