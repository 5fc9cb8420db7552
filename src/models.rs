//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_server_json() {
        let item: Item = serde_json::from_str(r#"{"id":"a1","name":"Buy milk","completed":false}"#).unwrap();
        assert_eq!(item.due_date, None);

        let item: Item =
            serde_json::from_str(r#"{"id":"a2","name":"Pay rent","completed":true,"dueDate":"2024-07-01"}"#).unwrap();
        assert_eq!(item.due_date.as_deref(), Some("2024-07-01"));
        assert!(item.completed);
    }
}
