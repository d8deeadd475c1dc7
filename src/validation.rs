pub const FULL_NAME_REQUIRED_MESSAGE: &str = "Full name is required";
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters";

pub const PASSWORD_MINIMUM_LENGTH: usize = 6;

/// The values currently entered into the sign-up form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationFields {
	pub full_name: String,
	pub email: String,
	pub password: String,
}

/// Validation messages for the sign-up form, one slot per field. A field
/// with no message is currently valid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	pub full_name: Option<&'static str>,
	pub email: Option<&'static str>,
	pub password: Option<&'static str>,
}

impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.full_name.is_none() && self.email.is_none() && self.password.is_none()
	}
}

/// Checks every field, producing a message for each one that fails. All
/// rules run on every call; the message set is rebuilt from scratch rather
/// than patched.
pub fn validate(fields: &RegistrationFields) -> FieldErrors {
	let mut errors = FieldErrors::default();
	if fields.full_name.trim().is_empty() {
		errors.full_name = Some(FULL_NAME_REQUIRED_MESSAGE);
	}
	if !email_shape_is_valid(&fields.email) {
		errors.email = Some(EMAIL_INVALID_MESSAGE);
	}
	// Length in UTF-16 units, the way browsers measure string length.
	if fields.password.encode_utf16().count() < PASSWORD_MINIMUM_LENGTH {
		errors.password = Some(PASSWORD_TOO_SHORT_MESSAGE);
	}
	errors
}

/// Checks that an address is shaped like `local@domain.tld`: no whitespace,
/// exactly one '@', a non-empty local part, and a domain part with a dot
/// somewhere other than its first or last character. No further RFC
/// compliance is attempted.
fn email_shape_is_valid(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let mut parts = email.split('@');
	let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
		return false;
	};
	if local.is_empty() {
		return false;
	}
	domain
		.char_indices()
		.any(|(index, character)| character == '.' && index > 0 && index + 1 < domain.len())
}
