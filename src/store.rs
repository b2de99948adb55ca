//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{NoteItem, SaveIndicatorState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Note shown in the editor
    pub open_item: Option<NoteItem>,
    /// Body text of the open note
    pub content: String,
    /// Save state reported to the header (None until the first load)
    pub save_state: Option<SaveIndicatorState>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Show a freshly loaded note
pub fn store_open_item(store: &AppStore, item: NoteItem, content: String) {
    store.open_item().set(Some(item));
    store.content().set(content);
    store.save_state().set(Some(SaveIndicatorState::Saved));
}

/// Replace the open note if `updated` is the same note
pub fn store_update_item(store: &AppStore, updated: NoteItem) {
    let open_item = store.open_item();
    let mut open = open_item.write();
    match &mut *open {
        Some(item) if item.id == updated.id => *item = updated,
        _ => {}
    }
}

pub fn store_clear_item(store: &AppStore) {
    store.open_item().set(None);
    store.content().set(String::new());
    store.save_state().set(None);
}

/// Report the save state of note `item_id`.
///
/// Saves finish asynchronously, so a report can arrive after another note
/// was opened; those are dropped.
pub fn store_report(store: &AppStore, item_id: &str, state: SaveIndicatorState) -> bool {
    let is_open = store
        .open_item()
        .with_untracked(|open| open.as_ref().is_some_and(|item| item.id == item_id));
    if !is_open {
        log::debug!("[STORE] dropping {:?} for {}, no longer open", state, item_id);
        return false;
    }
    store.save_state().set(Some(state));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, AppStore::new(AppState::default()))
    }

    #[test]
    fn test_late_report_for_previous_note_is_dropped() {
        let (_owner, store) = new_store();
        store_open_item(&store, NoteItem::new("a", "Alpha", 0), String::new());
        assert!(store_report(&store, "a", SaveIndicatorState::Saving));

        // Switch notes while "a" is still saving
        store_open_item(&store, NoteItem::new("b", "Beta", 0), String::new());
        assert!(!store_report(&store, "a", SaveIndicatorState::Unsaved));
        assert_eq!(store.save_state().get_untracked(), Some(SaveIndicatorState::Saved));

        assert!(store_report(&store, "b", SaveIndicatorState::Unsaved));
        assert_eq!(store.save_state().get_untracked(), Some(SaveIndicatorState::Unsaved));
    }

    #[test]
    fn test_report_without_open_note_is_dropped() {
        let (_owner, store) = new_store();
        assert!(!store_report(&store, "a", SaveIndicatorState::Saved));
        assert_eq!(store.save_state().get_untracked(), None);
    }

    #[test]
    fn test_update_only_replaces_same_note() {
        let (_owner, store) = new_store();
        store_open_item(&store, NoteItem::new("a", "Alpha", 0), String::new());

        store_update_item(&store, NoteItem::new("b", "Beta", 0));
        assert_eq!(store.open_item().with_untracked(|o| o.as_ref().map(|i| i.name.clone())), Some("Alpha".to_string()));

        store_update_item(&store, NoteItem::new("a", "Renamed", 0));
        assert_eq!(store.open_item().with_untracked(|o| o.as_ref().map(|i| i.name.clone())), Some("Renamed".to_string()));
    }
}
