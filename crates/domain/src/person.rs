//! Person payloads sent to the remote API.
//!
//! The server validates identifiers itself, so `PersonId` accepts both the
//! numeric and the string form and serializes them untagged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a person as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonId {
    /// JSON number, e.g. `42`.
    Number(i64),
    /// JSON string, e.g. `"42"` or `"aa"`.
    Text(String),
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPayload {
    /// Identifier proposed by the client.
    pub id: PersonId,
    /// Display name.
    pub name: String,
}

impl PersonPayload {
    /// Creates a payload.
    #[must_use]
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let payload = PersonPayload::new(462_539_845_238, "artem1");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"id": 462_539_845_238_i64, "name": "artem1"})
        );
    }

    #[test]
    fn test_text_id_serializes_as_string() {
        let payload = PersonPayload::new("-q0", "artem1");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"id": "-q0", "name": "artem1"})
        );
    }

    #[test]
    fn test_untagged_deserialization() {
        let number: PersonId = serde_json::from_value(json!(7)).unwrap();
        let text: PersonId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(number, PersonId::Number(7));
        assert_eq!(text, PersonId::Text("7".to_string()));
    }

    #[test]
    fn test_display_is_bare_value() {
        assert_eq!(PersonId::from(-1).to_string(), "-1");
        assert_eq!(PersonId::from("-q0").to_string(), "-q0");
    }
}
