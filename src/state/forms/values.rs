//! Raw values entered on the registration form

use super::field::{Field, FieldValue};
use serde::{Deserialize, Serialize};

/// Current value of every form field, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_date: String,
    pub gender: String,
    pub about_me: String,
    pub profession: String,
    pub terms: bool,
}

impl FormValues {
    /// Text of a field (empty for the terms checkbox)
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::AboutMe => &self.about_me,
            Field::Profession => &self.profession,
            Field::Terms => "",
        }
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        let slot = match field {
            Field::Terms => {
                self.terms = value.as_flag();
                return;
            }
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::BirthDate => &mut self.birth_date,
            Field::Gender => &mut self.gender,
            Field::AboutMe => &mut self.about_me,
            Field::Profession => &mut self.profession,
        };
        *slot = match value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => String::new(),
        };
    }
}
