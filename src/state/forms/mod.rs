//! Form domain layer
//!
//! Type-safe registration form handling:
//! - `field`: field identifiers, value objects and closed option sets
//! - `values`: the raw values entered on the form
//! - `errors`: per-field error map and touched-field tracking
//! - `form_state`: the owning aggregate and its snapshots

mod errors;
mod field;
mod form_state;
mod values;

pub use errors::{FieldErrors, TouchedSet};
pub use field::{choice_label, Field, FieldKind, FieldValue, Gender, Profession, UnknownField};
pub use form_state::{FormSnapshot, FormState, SubmissionPhase};
pub use values::FormValues;
