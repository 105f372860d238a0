//! Contact request types.
//!
//! Responses reuse [`contactbook_storage::Contact`] directly; its serde shape
//! is the wire shape.

use serde::Deserialize;
use serde_json::{Map, Value};

use contactbook_storage::NewContact;

/// Body of `POST /contact/create`.
///
/// Must be a JSON object. Every field is optional; missing or `null` fields
/// become empty strings. Unknown fields, including any caller-supplied `id`,
/// are ignored.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Field layout of the create body. Only ever decoded from an object, so
/// the positional (array) form serde derives for structs is never reached.
#[derive(Deserialize)]
struct CreateContactFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<Map<String, Value>> for CreateContactRequest {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: CreateContactFields = serde_json::from_value(Value::Object(object))?;
        Ok(CreateContactRequest {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        })
    }
}

impl From<CreateContactRequest> for NewContact {
    fn from(req: CreateContactRequest) -> Self {
        NewContact {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
        }
    }
}

/// Picks the `id` parameter out of a decoded query string.
///
/// The first occurrence wins when the parameter repeats; an absent parameter
/// means the empty id, which never matches a contact.
pub fn lookup_id(params: &[(String, String)]) -> String {
    params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_become_empty() {
        let req: CreateContactRequest =
            serde_json::from_str(r#"{"name":"Ann","email":null}"#).unwrap();
        let candidate = NewContact::from(req);
        assert_eq!(candidate, NewContact::new("Ann", "", ""));
    }

    #[test]
    fn supplied_id_is_ignored() {
        let req: CreateContactRequest =
            serde_json::from_str(r#"{"id":"mine","phone":"555"}"#).unwrap();
        assert_eq!(NewContact::from(req), NewContact::new("", "", "555"));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<CreateContactRequest>(r#"{"name":5}"#).is_err());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in ["[]", r#"["Ann","a@x.com","555"]"#, "null", "\"Ann\"", "7"] {
            assert!(
                serde_json::from_str::<CreateContactRequest>(body).is_err(),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn first_id_parameter_wins() {
        let params = vec![
            ("other".to_string(), "z".to_string()),
            ("id".to_string(), "x".to_string()),
            ("id".to_string(), "y".to_string()),
        ];
        assert_eq!(lookup_id(&params), "x");
        assert_eq!(lookup_id(&[]), "");
    }
}
