//! Todo Lists Component
//!
//! Client-only grouping of items into named lists. Lists live in memory and
//! are gone after a reload.

use leptos::prelude::*;

use crate::components::ItemListView;
use crate::store::{
    apply_groups, dispatch_group, use_app_store, AppStateStoreFields, GroupAction, ItemAction,
};

#[component]
pub fn TodoLists() -> impl IntoView {
    let store = use_app_store();

    // Only changes when another list is selected, not on item edits
    let active = Memo::new(move |_| store.groups().with(|groups| groups.active()));
    let active_items = Signal::derive(move || {
        store.groups().with(|groups| {
            groups
                .active_list()
                .map(|list| list.items.items().to_vec())
                .unwrap_or_default()
        })
    });

    view! {
        <section class="todo-lists">
            <h2>"Multiple To-Do Lists"</h2>

            <div>
                <button
                    class="create-list-btn"
                    on:click=move |_| apply_groups(&store, GroupAction::CreateList)
                >
                    "Create New List"
                </button>
            </div>

            <div class="list-tabs">
                <For
                    each=move || store.groups().with(|groups| groups.lists().to_vec())
                    key=|list| list.id
                    children=move |list| {
                        let id = list.id;
                        let tab_class = move || {
                            if active.get() == Some(id) { "list-tab active" } else { "list-tab" }
                        };
                        view! {
                            <button
                                class=tab_class
                                on:click=move |_| apply_groups(&store, GroupAction::SwitchTo(id))
                            >
                                {list.name}
                            </button>
                        }
                    }
                />
            </div>

            // Rebuilt per list so form state and late results stay with it
            {move || {
                active
                    .get()
                    .map(|list_id| {
                        view! {
                            <ItemListView
                                items=active_items
                                on_change=move |action: ItemAction| {
                                    dispatch_group(&store, list_id, action)
                                }
                            />
                        }
                    })
            }}
        </section>
    }
}
