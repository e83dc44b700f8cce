//! Field-level validation failures

use super::strength::Requirement;
use crate::state::Field;

/// Why a single field is currently invalid. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", required_message(.0))]
    Required(Field),
    #[error("{} must be 2-50 characters, letters and spaces only", name_label(.0))]
    NameFormat(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Username must be 3-20 characters, letters, numbers, and underscores only")]
    UsernameFormat,
    #[error("Password must be at most {max} characters")]
    PasswordTooLong { max: usize },
    #[error("Password must contain: {}", join_labels(.0))]
    WeakPassword(Vec<Requirement>),
    #[error("Please enter a password first")]
    PasswordMissing,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("You must be at least {minimum} years old")]
    Underage { minimum: i32 },
    #[error("Please select a valid option")]
    InvalidChoice(Field),
    #[error("About me must be at most {max} characters")]
    AboutMeTooLong { max: usize },
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::Email => "Email is required",
        Field::Username => "Username is required",
        Field::Password => "Password is required",
        Field::ConfirmPassword => "Please confirm your password",
        Field::BirthDate => "Birth date is required",
        Field::Gender => "Please select your gender",
        Field::Profession => "Please select your profession",
        Field::Terms => "You must accept the terms and conditions",
        Field::AboutMe => "This field is required",
    }
}

fn name_label(field: &Field) -> &'static str {
    match field {
        Field::LastName => "Last name",
        _ => "First name",
    }
}

fn join_labels(requirements: &[Requirement]) -> String {
    requirements
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}
