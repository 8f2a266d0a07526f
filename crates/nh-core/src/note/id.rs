use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned note identifier.
///
/// The API has been observed to send ids both as JSON strings and as
/// integers, so both decode into the same string-backed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for NoteId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => NoteId(s),
            Raw::Int(n) => NoteId(n.to_string()),
        })
    }
}
