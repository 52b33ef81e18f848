use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of a lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Every field, in the order they are evaluated and shown.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// The form control's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplies the current raw value of a named form field.
pub trait FieldReader {
    fn read(&self, field: Field) -> &str;
}

/// A snapshot of a lead form's raw, untrimmed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Take a snapshot from any field source.
    pub fn from_reader(reader: &impl FieldReader) -> Self {
        Self::new(
            reader.read(Field::Name),
            reader.read(Field::Email),
            reader.read(Field::Phone),
        )
    }
}

impl FieldReader for FormFields {
    fn read(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let names: Vec<_> = Field::ALL.iter().map(Field::as_str).collect();
        assert_eq!(names, vec!["name", "email", "phone"]);
    }

    #[test]
    fn test_read_returns_raw_value() {
        let fields = FormFields::new("  Jo ", "jo@ex.com", "");
        assert_eq!(fields.read(Field::Name), "  Jo ");
        assert_eq!(fields.read(Field::Phone), "");
    }

    #[test]
    fn test_from_reader_copies_every_field() {
        let source = FormFields::new("a", "b", "c");
        assert_eq!(FormFields::from_reader(&source), source);
    }

    #[test]
    fn test_deserialize_missing_fields_as_empty() {
        let fields: FormFields = serde_json::from_str(r#"{"name":"Jo"}"#).unwrap();
        assert_eq!(fields, FormFields::new("Jo", "", ""));
    }

    #[test]
    fn test_field_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Field::Email).unwrap(), "\"email\"");
    }
}
