//! The extracted contact record.

use serde::{Deserialize, Serialize};

/// One extracted directory entry.
///
/// Every field is optional: `None` means the corresponding sub-node was
/// not found in the entry, which is distinct from a node that was found
/// with empty text. Wire names are camelCase to match the page's origin
/// format (`parentEmail`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The person's name, from the entry title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The person's email, from the first mailto link in the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// A parent/guardian email, from the first mailto link in the
    /// household section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<String>,
    /// The state parsed out of the household address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Record {
    /// True when no sub-extraction found anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.parent_email.is_none()
            && self.state.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_absent_fields() {
        let record = Record {
            name: Some("Ada Lovelace".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ada Lovelace" }));
    }

    #[test]
    fn test_parent_email_wire_name_is_camel_case() {
        let record = Record {
            parent_email: Some("parent@example.test".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"parentEmail\""));
    }

    #[test]
    fn test_empty_string_field_is_still_present() {
        // Found-but-empty stays distinct from not-found.
        let record = Record {
            email: Some(String::new()),
            ..Default::default()
        };
        assert!(!record.is_empty());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "" }));
    }
}
