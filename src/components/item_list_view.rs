//! Item List View Component
//!
//! Form plus rows for one snapshot of items. Shared by the global card and
//! the active grouped list; the caller decides where changes go.

use leptos::prelude::*;

use crate::components::{AddItemForm, ItemDisplay};
use crate::models::Item;
use crate::store::ItemAction;

#[component]
pub fn ItemListView(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_change: Callback<ItemAction>,
) -> impl IntoView {
    view! {
        <AddItemForm on_new_item=move |item: Item| on_change.run(ItemAction::Added(item)) />

        <Show when=move || items.with(|items| items.is_empty())>
            <p class="text-center">"You have no to-do items yet! Add one above!"</p>
        </Show>

        // Keyed on the whole item so a changed row is rebuilt
        <For
            each=move || items.get()
            key=|item| item.clone()
            children=move |item| view! { <ItemDisplay item=item on_change=on_change /> }
        />
    }
}
