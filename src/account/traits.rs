//! Trait abstraction for account creation to enable mocking in tests

use crate::state::{FormValues, Gender, Profession};
use crate::validation::parse_birth_date;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Typed registration data, built only from a fully valid form
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub profession: Profession,
    pub about_me: Option<String>,
}

impl RegistrationRequest {
    /// Parse the raw values; fails if a typed field does not parse
    pub fn from_values(values: &FormValues) -> Result<Self> {
        let birth_date = parse_birth_date(&values.birth_date)
            .ok_or_else(|| anyhow!("Invalid birth date: {}", values.birth_date))?;
        let gender = Gender::parse(&values.gender)
            .ok_or_else(|| anyhow!("Invalid gender: {}", values.gender))?;
        let profession = Profession::parse(&values.profession)
            .ok_or_else(|| anyhow!("Invalid profession: {}", values.profession))?;
        let about_me = Some(values.about_me.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            first_name: values.first_name.trim().to_string(),
            last_name: values.last_name.trim().to_string(),
            email: values.email.trim().to_string(),
            username: values.username.trim().to_string(),
            password: values.password.clone(),
            birth_date,
            gender,
            profession,
            about_me,
        })
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("birth_date", &self.birth_date)
            .field("gender", &self.gender)
            .field("profession", &self.profession)
            .field("about_me", &self.about_me)
            .finish()
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReceipt {
    pub account_id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for account creation, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account for a validated registration
    async fn register(&self, request: RegistrationRequest) -> Result<AccountReceipt>;
}
