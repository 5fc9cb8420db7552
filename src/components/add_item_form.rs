//! Add Item Form Component
//!
//! Creates an item on the server, then hands the stored record upward.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewItem};
use crate::models::Item;

#[component]
pub fn AddItemForm(#[prop(into)] on_new_item: Callback<Item>) -> impl IntoView {
    let (new_name, set_new_name) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit_new_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() || submitting.get() {
            return;
        }
        let due = Some(due_date.get()).filter(|d| !d.is_empty());

        set_submitting.set(true);
        spawn_local(async move {
            let body = NewItem {
                name: &name,
                due_date: due.as_deref(),
            };
            match api::create_item(&body).await {
                Ok(item) => {
                    on_new_item.run(item);
                    set_new_name.set(String::new());
                    set_due_date.set(String::new());
                }
                Err(e) => {
                    let msg = format!("[ADD] Failed to create item: {}", e);
                    web_sys::console::error_1(&msg.into());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="add-item-form" on:submit=submit_new_item>
            <div class="input-group">
                <input
                    type="text"
                    placeholder="New Item"
                    aria-label="New item name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    aria-label="Due date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class=move || if submitting.get() { "add-btn disabled" } else { "add-btn" }
                    disabled=move || new_name.get().trim().is_empty()
                >
                    {move || if submitting.get() { "Adding..." } else { "Add Item" }}
                </button>
            </div>
        </form>
    }
}
