//! Contact entity types.
//!
//! [`ContactId`] is defined here because contact identity is a storage
//! concern: contacts only gain an ID when the registry accepts them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored contact.
///
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    /// Borrows the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        ContactId(s.to_string())
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        ContactId(s)
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Registry-assigned identifier.
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A contact candidate awaiting insertion.
///
/// Carries no identifier: the registry always assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        NewContact {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Attaches an identifier, producing the stored form.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_to_flat_object() {
        let contact =
            NewContact::new("Ann", "a@x.com", "555").with_id(ContactId::from("abc"));
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "name": "Ann",
                "email": "a@x.com",
                "phone": "555"
            })
        );
    }

    #[test]
    fn contact_id_displays_raw_text() {
        assert_eq!(ContactId::from("42").to_string(), "42");
    }
}
