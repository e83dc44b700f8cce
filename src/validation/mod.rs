//! Validation rules for the registration form
//!
//! - `rules`: per-field predicates and full-form validation
//! - `strength`: password strength scoring
//! - `cross_field`: password / confirmation pairing
//! - `error`: the field-level error type

mod cross_field;
mod error;
pub mod rules;
mod strength;

pub use cross_field::validate_confirmation;
pub use error::ValidationError;
pub use rules::{age_on, parse_birth_date, validate_field, validate_form, Mode};
pub use strength::{PasswordStrength, Requirement, StrengthLevel, MIN_PASSWORD_LENGTH};
