//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Note data structure (matches backend)
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created: i64,
    pub last_change: i64,
}

impl NoteItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: Vec::new(),
            color: None,
            icon: None,
            created: now_ms,
            last_change: now_ms,
        }
    }

    /// Same item with only the name replaced
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Same item with only the tag list replaced
    pub fn with_tags(&self, tags: Vec<String>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }

    pub fn is_starred(&self) -> bool {
        self.tags.iter().any(|tag| tag == InternalTag::Starred.as_str())
    }
}

/// Save status of the open note.
///
/// The owner reports `Saved`, `Unsaved` and `Saving`; `RecentlySaved` is the
/// short confirmation flash shown by the header after a save completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveIndicatorState {
    Saved,
    Unsaved,
    Saving,
    RecentlySaved,
}

/// Reserved tags with application meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalTag {
    Starred,
}

impl InternalTag {
    /// Prefix shared by every reserved tag
    pub const PREFIX: &'static str = "__";

    pub fn as_str(self) -> &'static str {
        match self {
            InternalTag::Starred => "__starred",
        }
    }

    pub fn is_internal(tag: &str) -> bool {
        tag.starts_with(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_name_keeps_other_fields() {
        let mut item = NoteItem::new("n1", "Draft", 10);
        item.tags = vec!["work".to_string()];
        item.color = Some("#FF0000".to_string());

        let renamed = item.with_name("Final");
        assert_eq!(renamed.name, "Final");
        assert_eq!(renamed.id, "n1");
        assert_eq!(renamed.tags, item.tags);
        assert_eq!(renamed.color, item.color);
        assert_eq!(renamed.last_change, 10);
    }

    #[test]
    fn test_is_starred() {
        let item = NoteItem::new("n1", "A", 0);
        assert!(!item.is_starred());
        let starred = item.with_tags(vec!["x".into(), "__starred".into()]);
        assert!(starred.is_starred());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let item = NoteItem::new("n1", "A", 42);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["lastChange"], 42);
        assert!(json.get("last_change").is_none());

        let parsed: NoteItem = serde_json::from_str(
            r#"{"id":"n2","name":"B","color":null,"icon":"book","created":1,"lastChange":2}"#,
        )
        .unwrap();
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.icon.as_deref(), Some("book"));
    }

    #[test]
    fn test_internal_tag_prefix() {
        assert!(InternalTag::is_internal(InternalTag::Starred.as_str()));
        assert!(!InternalTag::is_internal("starred"));
    }
}
