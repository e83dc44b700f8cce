//! Per-field validity rules
//!
//! Every rule is a pure function of the field's value (and, for the
//! confirmation and birth date, of the other values and today's date).
//! Rules can run standalone for live feedback or together through
//! [`validate_form`], which always evaluates every field.

use super::cross_field::validate_confirmation;
use super::error::ValidationError;
use super::strength::PasswordStrength;
use crate::state::{Field, FieldErrors, FormValues, Gender, Profession};
use chrono::{Datelike, NaiveDate};

pub const MINIMUM_AGE: i32 = 18;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_ABOUT_ME_LENGTH: usize = 500;
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

const NAME_LENGTH: (usize, usize) = (2, 50);
const USERNAME_LENGTH: (usize, usize) = (3, 20);

/// When a rule runs. Only the confirmation field behaves differently:
/// its "required" check is skipped while the user is still typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Full,
}

/// Validate one field against the current form values
pub fn validate_field(
    field: Field,
    values: &FormValues,
    today: NaiveDate,
    mode: Mode,
) -> Option<ValidationError> {
    match field {
        Field::FirstName => validate_name(Field::FirstName, &values.first_name),
        Field::LastName => validate_name(Field::LastName, &values.last_name),
        Field::Email => validate_email(&values.email),
        Field::Username => validate_username(&values.username),
        Field::Password => validate_password(&values.password),
        Field::ConfirmPassword => {
            if mode == Mode::Full && values.confirm_password.is_empty() {
                Some(ValidationError::Required(Field::ConfirmPassword))
            } else {
                validate_confirmation(&values.password, &values.confirm_password)
            }
        }
        Field::BirthDate => validate_birth_date(&values.birth_date, today),
        Field::Gender | Field::Profession => validate_choice(field, values.text(field)),
        Field::AboutMe => validate_about_me(&values.about_me),
        Field::Terms => validate_terms(values.terms),
    }
}

/// Run every rule and collect all failures
pub fn validate_form(values: &FormValues, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, values, today, Mode::Full));
    }
    errors
}

pub fn validate_name(field: Field, value: &str) -> Option<ValidationError> {
    let name = value.trim();
    if name.is_empty() {
        return Some(ValidationError::Required(field));
    }
    let (min, max) = NAME_LENGTH;
    let len = name.chars().count();
    let letters_and_spaces = name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
    if len < min || len > max || !letters_and_spaces {
        return Some(ValidationError::NameFormat(field));
    }
    None
}

pub fn validate_email(value: &str) -> Option<ValidationError> {
    let email = value.trim();
    if email.is_empty() {
        return Some(ValidationError::Required(Field::Email));
    }
    if !is_valid_email(email) {
        return Some(ValidationError::InvalidEmail);
    }
    None
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot in the
/// domain with text on both sides of it
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_username(value: &str) -> Option<ValidationError> {
    let username = value.trim();
    if username.is_empty() {
        return Some(ValidationError::Required(Field::Username));
    }
    let (min, max) = USERNAME_LENGTH;
    let len = username.chars().count();
    let allowed = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if len < min || len > max || !allowed {
        return Some(ValidationError::UsernameFormat);
    }
    None
}

pub fn validate_password(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required(Field::Password));
    }
    if value.chars().count() > MAX_PASSWORD_LENGTH {
        return Some(ValidationError::PasswordTooLong {
            max: MAX_PASSWORD_LENGTH,
        });
    }
    let strength = PasswordStrength::evaluate(value);
    if !strength.is_acceptable() {
        return Some(ValidationError::WeakPassword(strength.unmet));
    }
    None
}

pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Whole years between `birth` and `today`, counting a year only once the
/// birthday has been reached
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn validate_birth_date(value: &str, today: NaiveDate) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required(Field::BirthDate));
    }
    let Some(birth) = parse_birth_date(value) else {
        return Some(ValidationError::InvalidDate);
    };
    if age_on(birth, today) < MINIMUM_AGE {
        return Some(ValidationError::Underage {
            minimum: MINIMUM_AGE,
        });
    }
    None
}

pub fn validate_choice(field: Field, value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required(field));
    }
    let known = match field {
        Field::Gender => Gender::parse(value).is_some(),
        Field::Profession => Profession::parse(value).is_some(),
        _ => false,
    };
    if !known {
        return Some(ValidationError::InvalidChoice(field));
    }
    None
}

pub fn validate_about_me(value: &str) -> Option<ValidationError> {
    if value.chars().count() > MAX_ABOUT_ME_LENGTH {
        return Some(ValidationError::AboutMeTooLong {
            max: MAX_ABOUT_ME_LENGTH,
        });
    }
    None
}

pub fn validate_terms(accepted: bool) -> Option<ValidationError> {
    if accepted {
        None
    } else {
        Some(ValidationError::TermsNotAccepted)
    }
}
