//! UI Components
//!
//! Leptos components for the item card and the list grouping view.

mod add_item_form;
mod item_display;
mod item_list_view;
mod todo_list_card;
mod todo_lists;

pub use add_item_form::AddItemForm;
pub use item_display::ItemDisplay;
pub use item_list_view::ItemListView;
pub use todo_list_card::TodoListCard;
pub use todo_lists::TodoLists;
