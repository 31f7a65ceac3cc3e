use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque user identifier.
///
/// The data source may send ids as JSON strings or integers; both are kept in their
/// string form so `1` and `"1"` name the same user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UserId(s),
            RawId::Unsigned(n) => UserId(n.to_string()),
            RawId::Signed(n) => UserId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    // Expected to be "admin" or "member", but any string is accepted
    pub role: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
        }
    }
}

/// An editable column of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Role,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Role];

    pub fn title(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
        }
    }

    pub fn required_message(&self) -> String {
        format!("Please Input {}!", self.title())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "role" => Ok(Field::Role),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// Field values staged while a row is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedFields {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl StagedFields {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Role => self.role = value,
        }
    }

    /// Required fields that are still empty, in column order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Builds the record these values describe under the given id.
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_decode_from_strings_and_numbers() {
        let from_str: UserId = serde_json::from_str("\"7\"").unwrap();
        let from_num: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_num.as_str(), "7");
    }

    #[test]
    fn ids_serialize_as_strings() {
        let json = serde_json::to_string(&UserId::new("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn staged_fields_report_missing_in_column_order() {
        let staged = StagedFields {
            name: String::new(),
            email: "a@b.com".into(),
            role: String::new(),
        };
        assert_eq!(staged.missing(), vec![Field::Name, Field::Role]);
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("EMAIL".parse::<Field>().unwrap(), Field::Email);
        assert!("age".parse::<Field>().is_err());
    }
}
