//! Item Display Component
//!
//! One item row with toggle-complete and remove controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ItemPatch};
use crate::models::Item;
use crate::store::ItemAction;

#[component]
pub fn ItemDisplay(item: Item, #[prop(into)] on_change: Callback<ItemAction>) -> impl IntoView {
    let completed = item.completed;
    let toggle_id = item.id.clone();
    let toggle_name = item.name.clone();
    let remove_id = item.id.clone();

    let toggle_completion = move |_: web_sys::MouseEvent| {
        let id = toggle_id.clone();
        let name = toggle_name.clone();
        spawn_local(async move {
            let patch = ItemPatch {
                name: Some(&name),
                completed: Some(!completed),
                ..Default::default()
            };
            match api::update_item(&id, &patch).await {
                Ok(updated) => on_change.run(ItemAction::Updated(updated)),
                Err(e) => {
                    let msg = format!("[ITEM] Failed to update {}: {}", id, e);
                    web_sys::console::error_1(&msg.into());
                }
            }
        });
    };

    let remove_item = move |_: web_sys::MouseEvent| {
        let id = remove_id.clone();
        spawn_local(async move {
            match api::delete_item(&id).await {
                Ok(()) => on_change.run(ItemAction::Removed(id)),
                Err(e) => {
                    let msg = format!("[ITEM] Failed to remove {}: {}", id, e);
                    web_sys::console::error_1(&msg.into());
                }
            }
        });
    };

    let toggle_label = if completed { "Mark item as incomplete" } else { "Mark item as complete" };

    view! {
        <div class=if completed { "item completed" } else { "item" }>
            <button
                class="toggles"
                aria-label=toggle_label
                on:click=toggle_completion
            >
                {if completed { "☑" } else { "☐" }}
            </button>
            <span class="name">{item.name}</span>
            {item.due_date.map(|due| view! { <span class="due-date">{due}</span> })}
            <button class="remove" aria-label="Remove Item" on:click=remove_item>"×"</button>
        </div>
    }
}
