//! Item Endpoints
//!
//! Frontend bindings for `/items`.

use serde::Serialize;

use crate::models::Item;
use super::{check, decode, endpoint};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

/// Partial update; `None` fields are omitted, `due_date: Some(None)` clears
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<&'a str>>,
}

fn item_path(id: &str) -> String {
    endpoint(&format!("/items/{}", id))
}

// ========================
// Requests
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let response = reqwest::Client::new()
        .get(endpoint("/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn create_item(new_item: &NewItem<'_>) -> Result<Item, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/items"))
        .json(new_item)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn update_item(id: &str, patch: &ItemPatch<'_>) -> Result<Item, String> {
    let response = reqwest::Client::new()
        .put(item_path(id))
        .json(patch)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(item_path(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response).await.map(|_| ())
}
