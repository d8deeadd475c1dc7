// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::{FieldErrors, RegistrationFields};
use sycamore::prelude::*;

/// Which main panel is displayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurrentView {
	Signup,
	Users,
}

/// A snapshot of an accepted submission. The password is deliberately not
/// part of the snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisteredUser {
	pub full_name: String,
	pub email: String,
}

impl From<RegistrationFields> for RegisteredUser {
	fn from(fields: RegistrationFields) -> Self {
		Self {
			full_name: fields.full_name,
			email: fields.email,
		}
	}
}

/// Signals backing the sign-up form: the field values, their validation
/// messages, and the in-flight flag.
#[derive(Clone)]
pub struct RegistrationFormSignals {
	pub full_name: RcSignal<String>,
	pub email: RcSignal<String>,
	pub password: RcSignal<String>,
	pub full_name_error: RcSignal<Option<&'static str>>,
	pub email_error: RcSignal<Option<&'static str>>,
	pub password_error: RcSignal<Option<&'static str>>,
	pub submitting: RcSignal<bool>,
}

impl RegistrationFormSignals {
	pub fn new() -> Self {
		Self {
			full_name: create_rc_signal(String::new()),
			email: create_rc_signal(String::new()),
			password: create_rc_signal(String::new()),
			full_name_error: create_rc_signal(None),
			email_error: create_rc_signal(None),
			password_error: create_rc_signal(None),
			submitting: create_rc_signal(false),
		}
	}

	/// The current field values as one snapshot.
	pub fn fields(&self) -> RegistrationFields {
		RegistrationFields {
			full_name: (*self.full_name.get()).clone(),
			email: (*self.email.get()).clone(),
			password: (*self.password.get()).clone(),
		}
	}

	/// Replaces the whole message set; fields that passed are cleared.
	pub fn set_errors(&self, errors: FieldErrors) {
		self.full_name_error.set(errors.full_name);
		self.email_error.set(errors.email);
		self.password_error.set(errors.password);
	}

	fn reset(&self) {
		self.full_name.set(String::new());
		self.email.set(String::new());
		self.password.set(String::new());
		self.submitting.set(false);
	}
}

/// All of the signals that make up the application state. Created once at
/// startup and provided to every view through the reactive context.
#[derive(Clone)]
pub struct DataSignals {
	pub users: RcSignal<Vec<RegisteredUser>>,
	pub current_view: RcSignal<CurrentView>,
	pub registration: RegistrationFormSignals,
}

impl DataSignals {
	pub fn new() -> Self {
		Self {
			users: create_rc_signal(Vec::new()),
			current_view: create_rc_signal(CurrentView::Signup),
			registration: RegistrationFormSignals::new(),
		}
	}

	/// Applies an accepted submission once its acceptance delay has elapsed:
	/// appends the snapshot to the user list, clears the form back to its
	/// empty editable state, and reveals the registry panel.
	pub fn complete_registration(&self, fields: RegistrationFields) {
		log::info!("Registered user {}", fields.email);
		self.users.modify().push(RegisteredUser::from(fields));
		self.registration.reset();
		self.current_view.set(CurrentView::Users);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::FULL_NAME_REQUIRED_MESSAGE;

	fn filled_form(data: &DataSignals) {
		data.registration.full_name.set(String::from("Jane Doe"));
		data.registration.email.set(String::from("jane@example.com"));
		data.registration.password.set(String::from("secret1"));
	}

	#[test]
	fn completed_registration_is_appended_and_revealed() {
		let data = DataSignals::new();
		filled_form(&data);
		data.registration.submitting.set(true);

		data.complete_registration(data.registration.fields());

		assert_eq!(data.users.get().len(), 1);
		assert_eq!(
			data.users.get()[0],
			RegisteredUser {
				full_name: String::from("Jane Doe"),
				email: String::from("jane@example.com"),
			}
		);
		assert!(data.registration.full_name.get().is_empty());
		assert!(data.registration.email.get().is_empty());
		assert!(data.registration.password.get().is_empty());
		assert!(!*data.registration.submitting.get());
		assert_eq!(*data.current_view.get(), CurrentView::Users);
	}

	#[test]
	fn registrations_keep_insertion_order() {
		let data = DataSignals::new();
		data.complete_registration(RegistrationFields {
			full_name: String::from("Jane Doe"),
			email: String::from("jane@example.com"),
			password: String::from("secret1"),
		});
		data.complete_registration(RegistrationFields {
			full_name: String::from("John Roe"),
			email: String::from("john@example.com"),
			password: String::from("secret2"),
		});

		let users = data.users.get();
		assert_eq!(users.len(), 2);
		assert_eq!(users[0].full_name, "Jane Doe");
		assert_eq!(users[1].full_name, "John Roe");
	}

	#[test]
	fn switching_views_leaves_all_other_state_untouched() {
		let data = DataSignals::new();
		filled_form(&data);
		data.registration.full_name_error.set(Some(FULL_NAME_REQUIRED_MESSAGE));
		data.users.modify().push(RegisteredUser {
			full_name: String::from("Jane Doe"),
			email: String::from("jane@example.com"),
		});

		data.current_view.set(CurrentView::Users);
		data.current_view.set(CurrentView::Signup);

		assert_eq!(*data.registration.full_name.get(), "Jane Doe");
		assert_eq!(*data.registration.email.get(), "jane@example.com");
		assert_eq!(*data.registration.password.get(), "secret1");
		assert_eq!(*data.registration.full_name_error.get(), Some(FULL_NAME_REQUIRED_MESSAGE));
		assert_eq!(data.users.get().len(), 1);
	}
}
