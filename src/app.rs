//! To-Do Frontend App
//!
//! Global item card above the client-only grouped lists.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoListCard, TodoLists};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    view! {
        <main class="container">
            <h1>"To-Do"</h1>
            <TodoListCard />
            <TodoLists />
        </main>
    }
}
