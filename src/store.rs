//! Global Application State Store
//!
//! View state is kept as immutable snapshots. Every change goes through a
//! pure `reduce` that returns the next snapshot; the Leptos store only holds
//! the current one.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Change to a list of items, keyed by item id
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    /// Full list fetched from the server
    Loaded(Vec<Item>),
    /// Item created on the server
    Added(Item),
    /// Item as returned by the server after an update
    Updated(Item),
    /// Item deleted on the server
    Removed(String),
}

/// Ordered snapshot of items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unknown ids make `Updated` and `Removed` no-ops.
    /// `Added` with an id already present replaces that entry in place.
    pub fn reduce(&self, action: &ItemAction) -> ItemList {
        match action {
            ItemAction::Loaded(items) => ItemList::new(items.clone()),
            ItemAction::Added(item) => {
                if self.contains(&item.id) {
                    return self.replace(item);
                }
                let mut items = self.items.clone();
                items.push(item.clone());
                ItemList::new(items)
            }
            ItemAction::Updated(item) => self.replace(item),
            ItemAction::Removed(id) => ItemList::new(
                self.items.iter().filter(|i| &i.id != id).cloned().collect(),
            ),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    fn replace(&self, updated: &Item) -> ItemList {
        ItemList::new(
            self.items
                .iter()
                .map(|i| if i.id == updated.id { updated.clone() } else { i.clone() })
                .collect(),
        )
    }
}

/// Global list card: nothing is shown until the first fetch completes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardState {
    #[default]
    Loading,
    Loaded(ItemList),
}

impl CardState {
    pub fn reduce(&self, action: &ItemAction) -> CardState {
        match (self, action) {
            (_, ItemAction::Loaded(items)) => CardState::Loaded(ItemList::new(items.clone())),
            (CardState::Loading, _) => CardState::Loading,
            (CardState::Loaded(list), action) => CardState::Loaded(list.reduce(action)),
        }
    }
}

pub type ListId = u64;

pub const DEFAULT_LIST_NAME: &str = "New List";

/// Client-only named group of items
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub items: ItemList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupAction {
    CreateList,
    SwitchTo(ListId),
    /// Apply to one list only; dropped when that list does not exist
    ItemIn(ListId, ItemAction),
    /// Propagate an update or removal to every list holding the item
    Refresh(ItemAction),
}

/// Lists held in browser memory only
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroups {
    lists: Vec<TodoList>,
    active: Option<ListId>,
    next_id: ListId,
}

impl Default for ListGroups {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            active: None,
            next_id: 1,
        }
    }
}

impl ListGroups {
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn active(&self) -> Option<ListId> {
        self.active
    }

    pub fn active_list(&self) -> Option<&TodoList> {
        let active = self.active?;
        self.lists.iter().find(|l| l.id == active)
    }

    pub fn reduce(&self, action: &GroupAction) -> ListGroups {
        match action {
            GroupAction::CreateList => {
                let mut lists = self.lists.clone();
                lists.push(TodoList {
                    id: self.next_id,
                    name: DEFAULT_LIST_NAME.to_string(),
                    items: ItemList::default(),
                });
                ListGroups {
                    lists,
                    active: self.active,
                    next_id: self.next_id + 1,
                }
            }
            GroupAction::SwitchTo(id) => {
                if !self.lists.iter().any(|l| l.id == *id) {
                    return self.clone();
                }
                ListGroups {
                    active: Some(*id),
                    ..self.clone()
                }
            }
            GroupAction::ItemIn(target, item_action) => {
                if !self.lists.iter().any(|l| l.id == *target) {
                    return self.clone();
                }
                self.map_lists(|list| {
                    if list.id == *target {
                        list.items.reduce(item_action)
                    } else {
                        list.items.clone()
                    }
                })
            }
            GroupAction::Refresh(item_action) => match item_action {
                ItemAction::Updated(_) | ItemAction::Removed(_) => {
                    self.map_lists(|list| list.items.reduce(item_action))
                }
                ItemAction::Added(_) | ItemAction::Loaded(_) => self.clone(),
            },
        }
    }

    fn map_lists(&self, f: impl Fn(&TodoList) -> ItemList) -> ListGroups {
        ListGroups {
            lists: self
                .lists
                .iter()
                .map(|list| TodoList {
                    items: f(list),
                    ..list.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Server-synced list of every item
    pub card: CardState,
    /// Client-only grouping of items
    pub groups: ListGroups,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a change made through the global card.
///
/// Updates and removals also reach grouped copies of the same item.
pub fn dispatch_card(store: &AppStore, action: ItemAction) {
    store.card().update(|card| *card = card.reduce(&action));
    apply_groups(store, GroupAction::Refresh(action));
}

/// Apply a change made through a grouped list.
///
/// `list` is the list the change was started from, even if another list has
/// become active since. The item already lives on the server, so the global
/// card follows too.
pub fn dispatch_group(store: &AppStore, list: ListId, action: ItemAction) {
    apply_groups(store, GroupAction::ItemIn(list, action.clone()));
    store.card().update(|card| *card = card.reduce(&action));
}

pub fn apply_groups(store: &AppStore, action: GroupAction) {
    store.groups().update(|groups| *groups = groups.reduce(&action));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            completed: false,
            due_date: None,
        }
    }

    fn loaded(items: Vec<Item>) -> CardState {
        CardState::default().reduce(&ItemAction::Loaded(items))
    }

    #[test]
    fn test_card_starts_loading_and_ignores_early_mutations() {
        let card = CardState::default();
        assert_eq!(card, CardState::Loading);
        assert_eq!(card.reduce(&ItemAction::Added(item("a", "A"))), CardState::Loading);
    }

    #[test]
    fn test_card_add_update_remove() {
        let card = loaded(vec![item("a", "A"), item("b", "B")]);

        let card = card.reduce(&ItemAction::Added(item("c", "C")));
        let mut done = item("b", "B");
        done.completed = true;
        let card = card.reduce(&ItemAction::Updated(done.clone()));
        let card = card.reduce(&ItemAction::Removed("a".to_string()));

        assert_eq!(card, CardState::Loaded(ItemList::new(vec![done, item("c", "C")])));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let card = loaded(vec![item("a", "A")]);

        assert_eq!(card.reduce(&ItemAction::Updated(item("zzz", "Z"))), card);
        assert_eq!(card.reduce(&ItemAction::Removed("zzz".to_string())), card);
    }

    #[test]
    fn test_duplicate_add_replaces_in_place() {
        let list = ItemList::new(vec![item("a", "A"), item("b", "B")]);
        let next = list.reduce(&ItemAction::Added(item("a", "A2")));
        assert_eq!(next.items(), &[item("a", "A2"), item("b", "B")]);
    }

    #[test]
    fn test_reduce_leaves_previous_snapshot_untouched() {
        let list = ItemList::new(vec![item("a", "A")]);
        let _ = list.reduce(&ItemAction::Removed("a".to_string()));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_create_lists_with_default_name_and_unique_ids() {
        let groups = ListGroups::default()
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::CreateList);

        let ids: Vec<ListId> = groups.lists().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(groups.lists().iter().all(|l| l.name == DEFAULT_LIST_NAME && l.items.is_empty()));
        assert_eq!(groups.active(), None);
    }

    #[test]
    fn test_add_to_missing_list_is_dropped() {
        let empty = ListGroups::default();
        let next = empty.reduce(&GroupAction::ItemIn(1, ItemAction::Added(item("a", "A"))));
        assert_eq!(next, empty);

        let groups = empty.reduce(&GroupAction::CreateList);
        let next = groups.reduce(&GroupAction::ItemIn(7, ItemAction::Added(item("a", "A"))));
        assert_eq!(next, groups);
    }

    #[test]
    fn test_item_actions_touch_only_target_list() {
        let groups = ListGroups::default()
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::SwitchTo(2))
            .reduce(&GroupAction::ItemIn(2, ItemAction::Added(item("a", "A"))));

        assert!(groups.lists()[0].items.is_empty());
        assert_eq!(groups.active_list().unwrap().items.items(), &[item("a", "A")]);

        let groups = groups
            .reduce(&GroupAction::SwitchTo(1))
            .reduce(&GroupAction::ItemIn(1, ItemAction::Removed("a".to_string())));
        assert_eq!(groups.lists()[1].items.items(), &[item("a", "A")]);
    }

    #[test]
    fn test_late_add_lands_in_list_it_started_from() {
        let groups = ListGroups::default()
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::SwitchTo(1))
            .reduce(&GroupAction::SwitchTo(2))
            .reduce(&GroupAction::ItemIn(1, ItemAction::Added(item("a", "A"))));

        assert_eq!(groups.lists()[0].items.items(), &[item("a", "A")]);
        assert!(groups.active_list().unwrap().items.is_empty());
    }

    #[test]
    fn test_switch_to_unknown_list_is_ignored() {
        let groups = ListGroups::default()
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::SwitchTo(1));
        assert_eq!(groups.reduce(&GroupAction::SwitchTo(42)).active(), Some(1));
    }

    #[test]
    fn test_refresh_reaches_every_list() {
        let groups = ListGroups::default()
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::CreateList)
            .reduce(&GroupAction::ItemIn(1, ItemAction::Added(item("a", "A"))))
            .reduce(&GroupAction::ItemIn(2, ItemAction::Added(item("a", "A"))));

        let mut done = item("a", "A");
        done.completed = true;
        let updated = groups.reduce(&GroupAction::Refresh(ItemAction::Updated(done.clone())));
        assert!(updated.lists().iter().all(|l| l.items.items() == [done.clone()]));

        let removed = updated.reduce(&GroupAction::Refresh(ItemAction::Removed("a".to_string())));
        assert!(removed.lists().iter().all(|l| l.items.is_empty()));

        let added = groups.reduce(&GroupAction::Refresh(ItemAction::Added(item("b", "B"))));
        assert_eq!(added, groups);
    }

    #[test]
    fn test_dispatch_keeps_card_and_groups_in_step() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            dispatch_card(&store, ItemAction::Loaded(vec![item("a", "A")]));
            apply_groups(&store, GroupAction::CreateList);
            apply_groups(&store, GroupAction::SwitchTo(1));

            dispatch_group(&store, 1, ItemAction::Added(item("b", "B")));
            assert_eq!(
                store.card().get_untracked(),
                CardState::Loaded(ItemList::new(vec![item("a", "A"), item("b", "B")]))
            );

            let mut done = item("b", "B");
            done.completed = true;
            dispatch_card(&store, ItemAction::Updated(done.clone()));
            let groups = store.groups().get_untracked();
            assert_eq!(groups.active_list().unwrap().items.items(), &[done]);

            dispatch_card(&store, ItemAction::Removed("b".to_string()));
            assert!(store.groups().get_untracked().lists()[0].items.is_empty());
        });
    }
}
