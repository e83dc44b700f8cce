//! Form field identifiers and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every field on the registration form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    ConfirmPassword,
    BirthDate,
    Gender,
    AboutMe,
    Profession,
    Terms,
}

/// How a field is edited by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Date,
    Choice,
    Multiline,
    Checkbox,
}

impl Field {
    /// All fields in focus order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Username,
        Field::Password,
        Field::ConfirmPassword,
        Field::BirthDate,
        Field::Gender,
        Field::AboutMe,
        Field::Profession,
        Field::Terms,
    ];

    /// Stable key used in snapshots and error summaries
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::AboutMe => "aboutMe",
            Self::Profession => "profession",
            Self::Terms => "terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::BirthDate => "Birth Date (YYYY-MM-DD)",
            Self::Gender => "Gender",
            Self::AboutMe => "About Me",
            Self::Profession => "Profession",
            Self::Terms => "Terms",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password | Self::ConfirmPassword => FieldKind::Secret,
            Self::BirthDate => FieldKind::Date,
            Self::Gender | Self::Profession => FieldKind::Choice,
            Self::AboutMe => FieldKind::Multiline,
            Self::Terms => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Everything except "About Me" must be filled in
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::AboutMe)
    }

    /// Maximum number of characters the input control accepts
    pub fn input_limit(&self) -> Option<usize> {
        match self {
            Self::FirstName | Self::LastName => Some(50),
            Self::Username => Some(20),
            Self::Password | Self::ConfirmPassword => Some(128),
            Self::BirthDate => Some(10),
            Self::AboutMe => Some(500),
            _ => None,
        }
    }

    /// Option values for choice fields (empty for everything else)
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Gender => &Gender::VALUES,
            Self::Profession => &Profession::VALUES,
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field key does not name a registration field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the flag value; checkbox-style text ("true", "on", "1") counts as set
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => matches!(s.trim(), "true" | "on" | "1"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const VALUES: [&'static str; 3] = ["male", "female", "other"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    WebDevelopment,
    DataAnalytics,
    UiUxDesign,
    Ai,
    Other,
}

impl Profession {
    pub const VALUES: [&'static str; 5] =
        ["web_development", "data_analytics", "ui_ux_design", "ai", "other"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web_development" => Some(Self::WebDevelopment),
            "data_analytics" => Some(Self::DataAnalytics),
            "ui_ux_design" => Some(Self::UiUxDesign),
            "ai" => Some(Self::Ai),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::DataAnalytics => "Data Analytics",
            Self::UiUxDesign => "UI/UX Design",
            Self::Ai => "AI",
            Self::Other => "Other",
        }
    }
}

/// Human-readable label for a choice field's raw value
pub fn choice_label(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Gender => Gender::parse(value).map(|g| g.label()),
        Field::Profession => Profession::parse(value).map(|p| p.label()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field {
        use super::*;

        #[test]
        fn test_all_is_in_focus_order() {
            assert_eq!(Field::ALL.len(), 11);
            assert_eq!(Field::ALL[0], Field::FirstName);
            assert_eq!(Field::ALL[10], Field::Terms);
        }

        #[test]
        fn test_name_round_trips_through_from_str() {
            for field in Field::ALL {
                assert_eq!(field.name().parse::<Field>(), Ok(field));
            }
        }

        #[test]
        fn test_unknown_name_is_rejected() {
            let err = "nickname".parse::<Field>().unwrap_err();
            assert_eq!(err.to_string(), "unknown field `nickname`");
        }

        #[test]
        fn test_only_about_me_is_optional() {
            let optional: Vec<_> = Field::ALL.iter().filter(|f| !f.is_required()).collect();
            assert_eq!(optional, vec![&Field::AboutMe]);
        }

        #[test]
        fn test_kinds() {
            assert_eq!(Field::Password.kind(), FieldKind::Secret);
            assert_eq!(Field::ConfirmPassword.kind(), FieldKind::Secret);
            assert_eq!(Field::Gender.kind(), FieldKind::Choice);
            assert_eq!(Field::Terms.kind(), FieldKind::Checkbox);
            assert_eq!(Field::AboutMe.kind(), FieldKind::Multiline);
            assert_eq!(Field::Email.kind(), FieldKind::Text);
        }

        #[test]
        fn test_input_limits() {
            assert_eq!(Field::FirstName.input_limit(), Some(50));
            assert_eq!(Field::Username.input_limit(), Some(20));
            assert_eq!(Field::Password.input_limit(), Some(128));
            assert_eq!(Field::AboutMe.input_limit(), Some(500));
            assert_eq!(Field::Email.input_limit(), None);
        }

        #[test]
        fn test_choices() {
            assert_eq!(Field::Gender.choices(), &["male", "female", "other"]);
            assert_eq!(Field::Profession.choices().len(), 5);
            assert!(Field::Email.choices().is_empty());
        }

        #[test]
        fn test_serializes_as_camel_case_key() {
            let json = serde_json::to_string(&Field::ConfirmPassword).unwrap();
            assert_eq!(json, "\"confirmPassword\"");
        }
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_default_is_empty_text() {
            assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
        }

        #[test]
        fn test_as_flag_accepts_checkbox_text() {
            assert!(FieldValue::from("on").as_flag());
            assert!(FieldValue::from("true").as_flag());
            assert!(!FieldValue::from("off").as_flag());
            assert!(!FieldValue::from("").as_flag());
        }
    }

    mod choices {
        use super::*;

        #[test]
        fn test_gender_parse() {
            assert_eq!(Gender::parse("female"), Some(Gender::Female));
            assert_eq!(Gender::parse("Female"), None);
        }

        #[test]
        fn test_profession_parse() {
            assert_eq!(Profession::parse("ui_ux_design"), Some(Profession::UiUxDesign));
            assert_eq!(Profession::parse("design"), None);
        }

        #[test]
        fn test_choice_label() {
            assert_eq!(choice_label(Field::Profession, "ai"), Some("AI"));
            assert_eq!(choice_label(Field::Gender, "other"), Some("Other"));
            assert_eq!(choice_label(Field::Email, "other"), None);
        }
    }
}
