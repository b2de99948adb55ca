//! Data Interface
//!
//! Abstract access to stored notes. The Tauri implementation forwards to
//! backend commands; the in-memory one backs the browser-only build and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use leptos::prelude::expect_context;

use crate::commands;
use crate::error::{DataError, DataResult};
use crate::models::{InternalTag, NoteItem};

/// Note storage operations used by the header and its collaborators.
///
/// Futures are not `Send`: everything runs on the wasm event loop.
#[async_trait(?Send)]
pub trait DataInterface: Send + Sync {
    async fn get_item(&self, id: &str) -> DataResult<Option<NoteItem>>;

    /// Store a full replacement of the note and return what was stored
    async fn update_item(&self, item: &NoteItem) -> DataResult<NoteItem>;

    async fn duplicate_item(&self, id: &str) -> DataResult<NoteItem>;

    async fn delete_item(&self, id: &str) -> DataResult<()>;

    /// Notes whose name or tags contain `query` (case-insensitive)
    async fn search_items(&self, query: &str) -> DataResult<Vec<NoteItem>>;

    /// Distinct user tags across all notes, sorted
    async fn list_tags(&self) -> DataResult<Vec<String>>;

    async fn get_content(&self, id: &str) -> DataResult<String>;

    async fn set_content(&self, id: &str, content: &str) -> DataResult<()>;
}

/// Shared data interface handle provided via context
#[derive(Clone)]
pub struct DataHandle(Arc<dyn DataInterface>);

impl DataHandle {
    pub fn new(data: impl DataInterface + 'static) -> Self {
        Self(Arc::new(data))
    }
}

impl std::ops::Deref for DataHandle {
    type Target = dyn DataInterface;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_data_interface() -> DataHandle {
    expect_context::<DataHandle>()
}

// ========================
// Tauri Backend
// ========================

pub struct TauriDataInterface;

#[async_trait(?Send)]
impl DataInterface for TauriDataInterface {
    async fn get_item(&self, id: &str) -> DataResult<Option<NoteItem>> {
        commands::get_note(id).await
    }

    async fn update_item(&self, item: &NoteItem) -> DataResult<NoteItem> {
        commands::update_note(item).await
    }

    async fn duplicate_item(&self, id: &str) -> DataResult<NoteItem> {
        commands::duplicate_note(id).await
    }

    async fn delete_item(&self, id: &str) -> DataResult<()> {
        commands::delete_note(id).await
    }

    async fn search_items(&self, query: &str) -> DataResult<Vec<NoteItem>> {
        commands::search_notes(query).await
    }

    async fn list_tags(&self) -> DataResult<Vec<String>> {
        commands::list_note_tags().await
    }

    async fn get_content(&self, id: &str) -> DataResult<String> {
        commands::get_note_content(id).await
    }

    async fn set_content(&self, id: &str, content: &str) -> DataResult<()> {
        commands::set_note_content(id, content).await
    }
}

// ========================
// In-Memory Backend
// ========================

#[derive(Default)]
struct MemoryState {
    items: HashMap<String, NoteItem>,
    contents: HashMap<String, String>,
    next_id: u32,
}

impl MemoryState {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("note-{}", self.next_id)
    }
}

#[derive(Default)]
pub struct MemoryDataInterface {
    state: RwLock<MemoryState>,
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn poisoned<T>(_: T) -> DataError {
    DataError::Backend("memory store lock poisoned".to_string())
}

impl MemoryDataInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note with the given name and body
    pub fn insert(&self, name: &str, tags: &[&str], content: &str) -> DataResult<NoteItem> {
        let mut state = self.state.write().map_err(poisoned)?;
        let mut item = NoteItem::new(state.next_id(), name, now_ms());
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        state.contents.insert(item.id.clone(), content.to_string());
        state.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }
}

#[async_trait(?Send)]
impl DataInterface for MemoryDataInterface {
    async fn get_item(&self, id: &str) -> DataResult<Option<NoteItem>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.items.get(id).cloned())
    }

    async fn update_item(&self, item: &NoteItem) -> DataResult<NoteItem> {
        if item.name.trim().is_empty() {
            return Err(DataError::InvalidInput("note name must not be empty".to_string()));
        }
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .items
            .get_mut(&item.id)
            .ok_or_else(|| DataError::NotFound(item.id.clone()))?;
        *stored = NoteItem {
            created: stored.created,
            last_change: now_ms(),
            ..item.clone()
        };
        Ok(stored.clone())
    }

    async fn duplicate_item(&self, id: &str) -> DataResult<NoteItem> {
        let mut state = self.state.write().map_err(poisoned)?;
        let source = state
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(id.to_string()))?;
        let now = now_ms();
        let copy = NoteItem {
            id: state.next_id(),
            name: format!("{} (copy)", source.name),
            created: now,
            last_change: now,
            ..source
        };
        let content = state.contents.get(id).cloned().unwrap_or_default();
        state.contents.insert(copy.id.clone(), content);
        state.items.insert(copy.id.clone(), copy.clone());
        Ok(copy)
    }

    async fn delete_item(&self, id: &str) -> DataResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .items
            .remove(id)
            .ok_or_else(|| DataError::NotFound(id.to_string()))?;
        state.contents.remove(id);
        Ok(())
    }

    async fn search_items(&self, query: &str) -> DataResult<Vec<NoteItem>> {
        let query = query.trim().to_lowercase();
        let state = self.state.read().map_err(poisoned)?;
        let mut found: Vec<NoteItem> = state
            .items
            .values()
            .filter(|item| {
                query.is_empty()
                    || item.name.to_lowercase().contains(&query)
                    || item.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| b.last_change.cmp(&a.last_change).then_with(|| a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn list_tags(&self) -> DataResult<Vec<String>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut tags: Vec<String> = state
            .items
            .values()
            .flat_map(|item| item.tags.iter())
            .filter(|tag| !InternalTag::is_internal(tag))
            .cloned()
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }

    async fn get_content(&self, id: &str) -> DataResult<String> {
        let state = self.state.read().map_err(poisoned)?;
        if !state.items.contains_key(id) {
            return Err(DataError::NotFound(id.to_string()));
        }
        Ok(state.contents.get(id).cloned().unwrap_or_default())
    }

    async fn set_content(&self, id: &str, content: &str) -> DataResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let now = now_ms();
        let item = state
            .items
            .get_mut(id)
            .ok_or_else(|| DataError::NotFound(id.to_string()))?;
        item.last_change = now;
        state.contents.insert(id.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (MemoryDataInterface, NoteItem) {
        let data = MemoryDataInterface::new();
        let item = data.insert("Groceries", &["home", "__starred"], "milk").unwrap();
        data.insert("Sprint notes", &["work"], "").unwrap();
        (data, item)
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_created() {
        let (data, item) = seeded();
        let mut changed = item.with_name("Shopping");
        changed.created = 0;

        let stored = data.update_item(&changed).await.expect("Update failed");
        assert_eq!(stored.name, "Shopping");
        assert_eq!(stored.created, item.created);
        assert!(stored.last_change >= item.last_change);

        let found = data.get_item(&item.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Shopping");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_name() {
        let (data, item) = seeded();
        let err = data.update_item(&item.with_name("  ")).await.unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let data = MemoryDataInterface::new();
        let ghost = NoteItem::new("nope", "Ghost", 0);
        let err = data.update_item(&ghost).await.unwrap_err();
        assert_eq!(err, DataError::NotFound("nope".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_copies_content_and_tags() {
        let (data, item) = seeded();
        let copy = data.duplicate_item(&item.id).await.unwrap();
        assert_ne!(copy.id, item.id);
        assert_eq!(copy.name, "Groceries (copy)");
        assert_eq!(copy.tags, item.tags);
        assert_eq!(data.get_content(&copy.id).await.unwrap(), "milk");
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let (data, item) = seeded();
        data.delete_item(&item.id).await.expect("Delete failed");
        assert!(data.get_item(&item.id).await.unwrap().is_none());
        assert!(data.get_content(&item.id).await.is_err());
    }

    #[tokio::test]
    async fn test_search_by_name_and_tag() {
        let (data, _) = seeded();
        let by_name = data.search_items("sprint").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sprint notes");

        let by_tag = data.search_items("HOME").await.unwrap();
        assert_eq!(by_tag.len(), 1);

        assert_eq!(data.search_items("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_tags_hides_internal() {
        let (data, _) = seeded();
        assert_eq!(data.list_tags().await.unwrap(), vec!["home".to_string(), "work".to_string()]);
    }

    #[tokio::test]
    async fn test_set_content_touches_last_change() {
        let (data, item) = seeded();
        data.set_content(&item.id, "milk, eggs").await.unwrap();
        assert_eq!(data.get_content(&item.id).await.unwrap(), "milk, eggs");
        let found = data.get_item(&item.id).await.unwrap().unwrap();
        assert!(found.last_change >= item.last_change);
    }
}
