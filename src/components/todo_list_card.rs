//! Todo List Card Component
//!
//! The server-synced list of every item. Fetches once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ItemListView;
use crate::store::{dispatch_card, use_app_store, AppStateStoreFields, CardState, ItemAction};

#[component]
pub fn TodoListCard() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(loaded) => {
                    let msg = format!("[CARD] Loaded {} items", loaded.len());
                    web_sys::console::log_1(&msg.into());
                    dispatch_card(&store, ItemAction::Loaded(loaded));
                }
                Err(e) => {
                    let msg = format!("[CARD] Failed to load items: {}", e);
                    web_sys::console::error_1(&msg.into());
                }
            }
        });
    });

    let items = Signal::derive(move || match store.card().get() {
        CardState::Loaded(list) => list.items().to_vec(),
        CardState::Loading => Vec::new(),
    });

    view! {
        <section class="todo-list-card">
            <Show
                when=move || store.card().with(|card| matches!(card, CardState::Loaded(_)))
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ItemListView
                    items=items
                    on_change=move |action: ItemAction| dispatch_card(&store, action)
                />
            </Show>
        </section>
    }
}
