//! Item Entity
//!
//! Represents a single to-do entry.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Opaque item identifier, issued by the server as a UUID v4
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, immutable after creation
    pub id: ItemId,
    /// Item text
    pub name: String,
    /// Completion status
    pub completed: bool,
    /// Optional due date as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, name: String, due_date: Option<String>) -> Self {
        Self {
            id,
            name,
            completed: false,
            due_date,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;
    type Patch = ItemPatch;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(due_date) = &patch.due_date {
            self.due_date = due_date.clone();
        }
    }
}

/// Request body for creating an item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl NewItem {
    /// Validate and turn the request into a fresh item with a new id
    pub fn into_item(self) -> DomainResult<Item> {
        validate_name(&self.name)?;
        Ok(Item::new(ItemId::generate(), self.name, self.due_date))
    }
}

/// Partial update. Absent fields are left untouched.
///
/// `due_date` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which clears the due date.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
}

impl ItemPatch {
    pub fn validate(&self) -> DomainResult<()> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput("item name must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_incomplete() {
        let item = NewItem { name: "Buy milk".to_string(), due_date: None }
            .into_item()
            .unwrap();
        assert_eq!(item.name, "Buy milk");
        assert!(!item.completed);
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = NewItem { name: "   ".to_string(), due_date: None }
            .into_item()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut item = Item::new("a".into(), "Walk dog".to_string(), Some("2024-05-01".to_string()));
        let patch: ItemPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        item.apply(&patch);

        assert!(item.completed);
        assert_eq!(item.name, "Walk dog");
        assert_eq!(item.due_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_patch_null_due_date_clears() {
        let mut item = Item::new("a".into(), "Pay rent".to_string(), Some("2024-05-01".to_string()));
        let patch: ItemPatch = serde_json::from_str(r#"{"dueDate":null}"#).unwrap();
        assert_eq!(patch.due_date, Some(None));

        item.apply(&patch);
        assert_eq!(item.due_date, None);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("x1".into(), "Read".to_string(), None);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": "x1", "name": "Read", "completed": false}));

        let dated = Item::new("x2".into(), "Read".to_string(), Some("2024-01-02".to_string()));
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json["dueDate"], "2024-01-02");
    }
}
