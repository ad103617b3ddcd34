//! Field validation for [`UserRecord`].
//!
//! Each field is checked on its own; there are no cross-field rules.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::models::UserRecord;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

// `\d` would also accept non-ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^010-[0-9]{4}-[0-9]{4}$").expect("phone pattern compiles"));

/// One of the three fields of a [`UserRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Email];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Email => "Email",
        }
    }

    /// Read this field from a record.
    pub fn get<'a>(&self, record: &'a UserRecord) -> &'a str {
        match self {
            Field::Name => &record.name,
            Field::Phone => &record.phone,
            Field::Email => &record.email,
        }
    }

    pub(crate) fn set(&self, record: &mut UserRecord, value: String) {
        match self {
            Field::Name => record.name = value,
            Field::Phone => record.phone = value,
            Field::Email => record.email = value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A field that failed its rule, with the message shown next to the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Per-field errors for a whole record. `None` means the field is valid
/// (or was not checked).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Phone => self.phone.as_ref(),
            Field::Email => self.email.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    fn put(&mut self, error: ValidationError) {
        match error.field {
            Field::Name => self.name = Some(error),
            Field::Phone => self.phone = Some(error),
            Field::Email => self.email = Some(error),
        }
    }
}

/// Check a single field value against its rule.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => {
            let len = value.chars().count();
            if len < NAME_MIN_CHARS {
                Err(ValidationError::new(
                    field,
                    format!("Name must be at least {NAME_MIN_CHARS} characters"),
                ))
            } else if len > NAME_MAX_CHARS {
                Err(ValidationError::new(
                    field,
                    format!("Name cannot be longer than {NAME_MAX_CHARS} characters"),
                ))
            } else {
                Ok(())
            }
        }
        Field::Phone => {
            if PHONE_PATTERN.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    field,
                    "Phone number must look like 010-XXXX-XXXX",
                ))
            }
        }
        Field::Email => {
            if value.validate_email() {
                Ok(())
            } else {
                Err(ValidationError::new(field, "Please enter a valid email address"))
            }
        }
    }
}

/// Validate every field of a record.
pub fn validate_record(record: &UserRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Err(e) = validate_field(field, field.get(record)) {
            errors.put(e);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate only the fields that have been filled in.
pub fn validate_present(record: &UserRecord) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        let value = field.get(record);
        if value.is_empty() {
            continue;
        }
        if let Err(e) = validate_field(field, value) {
            errors.put(e);
        }
    }
    errors
}

impl UserRecord {
    /// A record is submittable only when all three fields pass.
    pub fn is_complete(&self) -> bool {
        validate_record(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(validate_field(Field::Name, "").is_err());
        assert!(validate_field(Field::Name, "A").is_err());
        assert!(validate_field(Field::Name, "Al").is_ok());
        assert!(validate_field(Field::Name, &"x".repeat(50)).is_ok());
        assert!(validate_field(Field::Name, &"x".repeat(51)).is_err());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // Two Hangul syllables are six bytes but two characters.
        assert!(validate_field(Field::Name, "홍길").is_ok());
        assert!(validate_field(Field::Name, &"홍".repeat(50)).is_ok());
        assert!(validate_field(Field::Name, &"홍".repeat(51)).is_err());
    }

    #[test]
    fn test_phone_pattern() {
        assert!(validate_field(Field::Phone, "010-1234-5678").is_ok());

        for bad in [
            "01012345678",
            "011-1234-5678",
            "010-123-5678",
            "010-1234-56789",
            " 010-1234-5678",
            "010-1234-5678 ",
            "010-12a4-5678",
            "010-１２３４-5678",
            "",
        ] {
            assert!(validate_field(Field::Phone, bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_email_syntax() {
        assert!(validate_field(Field::Email, "party@example.com").is_ok());
        assert!(validate_field(Field::Email, "first.last+tag@sub.example.co.kr").is_ok());

        for bad in ["", "not-an-email", "user@", "@example.com", "two words@example.com"] {
            assert!(validate_field(Field::Email, bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_error_carries_field_and_message() {
        let err = validate_field(Field::Email, "nope").unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_validate_record_reports_each_field() {
        let record = UserRecord::new("A", "010-1234-5678", "bad");
        let errors = validate_record(&record).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.phone.is_none());
        assert!(errors.email.is_some());
        assert!(!record.is_complete());

        let record = UserRecord::new("Hong", "010-1234-5678", "hong@example.com");
        assert!(validate_record(&record).is_ok());
        assert!(record.is_complete());
    }

    #[test]
    fn test_validate_present_skips_empty_fields() {
        let record = UserRecord::new("Hong", "", "");
        assert!(validate_present(&record).is_empty());

        let record = UserRecord::new("Hong", "010-12", "");
        let errors = validate_present(&record);
        assert!(errors.get(Field::Phone).is_some());
        assert!(errors.get(Field::Email).is_none());
    }
}
