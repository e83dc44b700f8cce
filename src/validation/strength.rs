//! Password strength evaluation
//!
//! A password is scored against five independent criteria, one point each.
//! Only a full score is acceptable; lower scores drive the remediation hint.

use serde::{Deserialize, Serialize};

/// Minimum number of characters for the length criterion
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// One strength criterion, listed in feedback order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Requirement::MinLength,
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Digit,
        Requirement::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Lowercase => "One lowercase letter",
            Self::Uppercase => "One uppercase letter",
            Self::Digit => "One number",
            Self::Special => "One special character",
        }
    }

    pub fn is_met_by(&self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

/// Display tier of the strength meter; there is no intermediate tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    /// Nothing typed yet
    Empty,
    Weak,
    VeryStrong,
}

/// Score and unmet requirements derived from a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub unmet: Vec<Requirement>,
}

impl Default for PasswordStrength {
    /// The strength of an empty password
    fn default() -> Self {
        Self {
            score: 0,
            unmet: Requirement::ALL.to_vec(),
        }
    }
}

impl PasswordStrength {
    /// Score a password against every criterion
    pub fn evaluate(password: &str) -> Self {
        let unmet: Vec<Requirement> = Requirement::ALL
            .into_iter()
            .filter(|r| !r.is_met_by(password))
            .collect();
        let score = (Requirement::ALL.len() - unmet.len()) as u8;
        Self { score, unmet }
    }

    pub fn is_acceptable(&self) -> bool {
        self.unmet.is_empty()
    }

    pub fn unmet_labels(&self) -> Vec<&'static str> {
        self.unmet.iter().map(|r| r.label()).collect()
    }

    pub fn level(&self, password: &str) -> StrengthLevel {
        if password.is_empty() {
            StrengthLevel::Empty
        } else if self.is_acceptable() {
            StrengthLevel::VeryStrong
        } else {
            StrengthLevel::Weak
        }
    }

    /// Hint shown under the password field
    pub fn hint(&self, password: &str) -> String {
        match self.level(password) {
            StrengthLevel::Empty => {
                "Password must contain: uppercase, lowercase, number, special character, min 8 chars"
                    .to_string()
            }
            StrengthLevel::Weak => format!("Still needed: {}", self.unmet_labels().join(", ")),
            StrengthLevel::VeryStrong => "✓ Password meets all requirements!".to_string(),
        }
    }
}
