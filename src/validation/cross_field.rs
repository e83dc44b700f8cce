//! Password / confirmation pairing

use super::error::ValidationError;

/// Live check of the confirmation against the password.
///
/// An empty confirmation is not an error here; the "required" check runs only
/// during full-form validation.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<ValidationError> {
    if confirmation.is_empty() {
        None
    } else if password.is_empty() {
        Some(ValidationError::PasswordMissing)
    } else if confirmation != password {
        Some(ValidationError::PasswordMismatch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_confirmation_is_deferred() {
        assert_eq!(validate_confirmation("", ""), None);
        assert_eq!(validate_confirmation("Abc12345!", ""), None);
    }

    #[test]
    fn test_password_first() {
        assert_eq!(
            validate_confirmation("", "Abc12345!"),
            Some(ValidationError::PasswordMissing)
        );
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            validate_confirmation("Abc12345!", "Abc12345?"),
            Some(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_match() {
        assert_eq!(validate_confirmation("Abc12345!", "Abc12345!"), None);
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_eq!(
            validate_confirmation("Abc12345!", "Abc12345! "),
            Some(ValidationError::PasswordMismatch)
        );
    }
}
