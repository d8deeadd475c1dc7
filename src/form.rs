use crate::validation::{validate, FieldErrors, RegistrationFields};

/// How long the simulated acceptance of a valid submission takes.
pub const SUBMISSION_DELAY_MS: u32 = 1000;

/// The decision reached for one press of the submit control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// A previous submission is still in flight; the attempt is ignored.
	InFlight,
	/// Validation failed; the form stays editable and shows these messages.
	Rejected(FieldErrors),
	/// Validation passed; this snapshot goes to the delayed acceptance.
	Accepted(RegistrationFields),
}

/// Decides what a submit attempt does. At most one submission may be in
/// flight at a time, so an attempt made while one is pending is dropped
/// before any validation runs.
pub fn evaluate_submission(fields: RegistrationFields, submitting: bool) -> SubmitOutcome {
	if submitting {
		return SubmitOutcome::InFlight;
	}
	let errors = validate(&fields);
	if errors.is_empty() {
		SubmitOutcome::Accepted(fields)
	} else {
		SubmitOutcome::Rejected(errors)
	}
}
