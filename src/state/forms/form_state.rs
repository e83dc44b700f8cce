//! Registration form state
//!
//! `FormState` is the single owner of everything the form knows: raw values,
//! per-field errors, touched fields, the derived password strength and the
//! submission phase. Every mutation keeps the error map consistent with the
//! values before it returns; the presentation layer only reads snapshots.

use super::errors::{FieldErrors, TouchedSet};
use super::field::{Field, FieldValue};
use super::values::FormValues;
use crate::account::AccountReceipt;
use crate::validation::{validate_field, validate_form, Mode, PasswordStrength, ValidationError};
use chrono::{Local, NaiveDate};

/// Where the form is in the submit lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Waiting for the simulated account creation
    Submitting,
    /// Account created; holds what the confirmation displays
    Succeeded(AccountReceipt),
}

/// Immutable copy of the form for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: TouchedSet,
    pub strength: PasswordStrength,
    pub phase: SubmissionPhase,
    pub submit_attempted: bool,
}

impl FormSnapshot {
    /// Error for a field if the user should see it yet
    pub fn visible_error(&self, field: Field) -> Option<&ValidationError> {
        if self.submit_attempted || self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    /// Submitted (username, email) once the account exists
    pub fn confirmation(&self) -> Option<(&str, &str)> {
        match &self.phase {
            SubmissionPhase::Succeeded(receipt) => {
                Some((receipt.username.as_str(), receipt.email.as_str()))
            }
            _ => None,
        }
    }

    pub fn about_me_count(&self) -> usize {
        self.values.about_me.chars().count()
    }

    pub fn strength_hint(&self) -> String {
        self.strength.hint(&self.values.password)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: TouchedSet,
    strength: PasswordStrength,
    phase: SubmissionPhase,
    submit_attempted: bool,
    /// Fixed date for age checks; `None` means the local calendar date
    today: Option<NaiveDate>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form whose age checks use a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..Self::default()
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Update a field and re-validate everything that depends on it.
    ///
    /// Password and confirmation are always re-validated as a pair.
    pub fn set_value(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.set(field, value.into());
        let today = self.today();

        match field {
            Field::Password | Field::ConfirmPassword => {
                if field == Field::Password {
                    self.strength = PasswordStrength::evaluate(&self.values.password);
                }
                for paired in [Field::Password, Field::ConfirmPassword] {
                    let error = validate_field(paired, &self.values, today, Mode::Live);
                    self.errors.set(paired, error);
                }
            }
            other => {
                let error = validate_field(other, &self.values, today, Mode::Live);
                self.errors.set(other, error);
            }
        }

        tracing::trace!(field = %field, valid = !self.errors.contains(field), "field updated");
    }

    /// Record that the user has left a field; validity is unchanged
    pub fn mark_touched(&mut self, field: Field) {
        if self.touched.insert(field) {
            tracing::trace!(field = %field, "field touched");
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            touched: self.touched.clone(),
            strength: self.strength.clone(),
            phase: self.phase.clone(),
            submit_attempted: self.submit_attempted,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn strength(&self) -> &PasswordStrength {
        &self.strength
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Full re-check of every field from the current values alone
    pub fn validate_all(&self) -> FieldErrors {
        validate_form(&self.values, self.today())
    }

    /// Make every error visible and replace the error map with a full re-check
    pub(crate) fn record_submit_attempt(&mut self) -> &FieldErrors {
        self.submit_attempted = true;
        self.errors = self.validate_all();
        &self.errors
    }

    pub(crate) fn set_phase(&mut self, phase: SubmissionPhase) {
        self.phase = phase;
    }

    /// Back to a blank form in the Editing phase
    pub fn reset(&mut self) {
        let today = self.today;
        *self = Self {
            today,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Requirement;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn filled_form() -> FormState {
        let mut form = FormState::with_today(today());
        form.set_value(Field::FirstName, "Grace");
        form.set_value(Field::LastName, "Hopper");
        form.set_value(Field::Email, "grace@navy.mil");
        form.set_value(Field::Username, "amazing_grace");
        form.set_value(Field::Password, "Abc12345!");
        form.set_value(Field::ConfirmPassword, "Abc12345!");
        form.set_value(Field::BirthDate, "1990-12-09");
        form.set_value(Field::Gender, "female");
        form.set_value(Field::Profession, "web_development");
        form.set_value(Field::Terms, true);
        form
    }

    mod set_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_has_no_errors() {
            let form = FormState::with_today(today());
            assert!(form.errors().is_empty());
            assert_eq!(form.phase(), &SubmissionPhase::Editing);
        }

        #[test]
        fn test_recomputes_field_error() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Username, "ab");
            assert!(form.errors().contains(Field::Username));
            form.set_value(Field::Username, "valid_user1");
            assert!(!form.errors().contains(Field::Username));
        }

        #[test]
        fn test_is_idempotent() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Email, "not-an-email");
            let first = form.errors().clone();
            form.set_value(Field::Email, "not-an-email");
            assert_eq!(form.errors(), &first);
        }

        #[test]
        fn test_password_change_updates_strength() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Password, "abc");
            assert_eq!(form.strength().score, 1);
            assert_eq!(
                form.errors().get(Field::Password),
                Some(&ValidationError::WeakPassword(vec![
                    Requirement::MinLength,
                    Requirement::Uppercase,
                    Requirement::Digit,
                    Requirement::Special,
                ]))
            );
        }

        #[test]
        fn test_password_change_invalidates_confirmation() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Password, "Abc12345!");
            form.set_value(Field::ConfirmPassword, "Abc12345!");
            assert!(!form.errors().contains(Field::ConfirmPassword));

            form.set_value(Field::Password, "Abc12345?");
            assert_eq!(
                form.errors().get(Field::ConfirmPassword),
                Some(&ValidationError::PasswordMismatch)
            );

            form.set_value(Field::Password, "");
            assert_eq!(
                form.errors().get(Field::ConfirmPassword),
                Some(&ValidationError::PasswordMissing)
            );
        }

        #[test]
        fn test_confirmation_change_revalidates_pair() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::ConfirmPassword, "Abc12345!");
            assert_eq!(
                form.errors().get(Field::ConfirmPassword),
                Some(&ValidationError::PasswordMissing)
            );
            form.set_value(Field::Password, "Abc12345!");
            assert!(!form.errors().contains(Field::ConfirmPassword));
            assert!(!form.errors().contains(Field::Password));
        }

        #[test]
        fn test_empty_confirmation_is_not_an_error_live() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Password, "Abc12345!");
            form.set_value(Field::ConfirmPassword, "x");
            form.set_value(Field::ConfirmPassword, "");
            assert!(!form.errors().contains(Field::ConfirmPassword));
        }

        #[test]
        fn test_terms_from_bool() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Terms, false);
            assert_eq!(
                form.errors().get(Field::Terms),
                Some(&ValidationError::TermsNotAccepted)
            );
            form.set_value(Field::Terms, true);
            assert!(form.errors().is_empty());
        }
    }

    mod visibility {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_hidden_until_touched() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::Email, "broken");
            let snapshot = form.snapshot();
            assert!(snapshot.errors.contains(Field::Email));
            assert!(snapshot.visible_error(Field::Email).is_none());

            form.mark_touched(Field::Email);
            assert_eq!(
                form.snapshot().visible_error(Field::Email),
                Some(&ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_touch_does_not_change_validity() {
            let mut form = FormState::with_today(today());
            form.mark_touched(Field::FirstName);
            assert!(form.errors().is_empty());
            assert!(form.touched().contains(Field::FirstName));
        }

        #[test]
        fn test_submit_attempt_reveals_all_errors() {
            let mut form = FormState::with_today(today());
            form.record_submit_attempt();
            let snapshot = form.snapshot();
            assert!(snapshot.submit_attempted);
            assert_eq!(
                snapshot
                    .visible_error(Field::LastName)
                    .map(ToString::to_string),
                Some("Last name is required".to_string())
            );
        }
    }

    mod full_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_independent_of_touched_state() {
            let mut untouched = filled_form();
            untouched.set_value(Field::Email, "broken");
            let mut touched = untouched.clone();
            for field in Field::ALL {
                touched.mark_touched(field);
            }
            assert_eq!(untouched.validate_all(), touched.validate_all());
        }

        #[test]
        fn test_ignores_cached_errors() {
            let mut form = filled_form();
            form.set_value(Field::ConfirmPassword, "");
            assert!(!form.errors().contains(Field::ConfirmPassword));
            let errors = form.record_submit_attempt();
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some(&ValidationError::Required(Field::ConfirmPassword))
            );
        }

        #[test]
        fn test_filled_form_is_valid() {
            assert!(filled_form().validate_all().is_empty());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_clears_everything_but_keeps_date() {
            let mut form = filled_form();
            form.mark_touched(Field::Email);
            form.record_submit_attempt();
            form.set_phase(SubmissionPhase::Submitting);

            form.reset();

            assert_eq!(form.values(), &FormValues::default());
            assert!(form.errors().is_empty());
            assert!(form.touched().is_empty());
            assert_eq!(form.strength(), &PasswordStrength::default());
            assert_eq!(form.phase(), &SubmissionPhase::Editing);
            assert!(!form.submit_attempted());
            assert_eq!(form.today(), today());
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_snapshot_is_a_copy() {
            let mut form = filled_form();
            let before = form.snapshot();
            form.set_value(Field::Username, "x");
            assert_eq!(before.values.username, "amazing_grace");
        }

        #[test]
        fn test_about_me_count() {
            let mut form = FormState::with_today(today());
            form.set_value(Field::AboutMe, "héllo");
            assert_eq!(form.snapshot().about_me_count(), 5);
        }

        #[test]
        fn test_submit_enabled_only_while_editing() {
            let mut form = FormState::with_today(today());
            assert!(form.snapshot().is_submit_enabled());
            form.set_phase(SubmissionPhase::Submitting);
            assert!(!form.snapshot().is_submit_enabled());
            assert!(form.snapshot().confirmation().is_none());
        }
    }
}
