//! Title Draft
//!
//! Local copy of the note name while the user edits it.

/// Draft title bound to one displayed item.
///
/// The draft only resets when the item identity changes, so a rename that
/// lands while the user is typing does not clobber the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleDraft {
    item_id: Option<String>,
    value: String,
    /// Value when the current edit began (None = not editing)
    edit_origin: Option<String>,
}

impl TitleDraft {
    pub fn new(item_id: &str, name: &str) -> Self {
        Self {
            item_id: Some(item_id.to_string()),
            value: name.to_string(),
            edit_origin: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_editing(&self) -> bool {
        self.edit_origin.is_some()
    }

    /// Follow the displayed item. Returns true when the draft was reset.
    pub fn sync(&mut self, item_id: &str, name: &str) -> bool {
        if self.item_id.as_deref() == Some(item_id) {
            return false;
        }
        self.item_id = Some(item_id.to_string());
        self.value = name.to_string();
        self.edit_origin = None;
        true
    }

    /// Start an edit session (no-op if one is running)
    pub fn begin_edit(&mut self) {
        if self.edit_origin.is_none() {
            self.edit_origin = Some(self.value.clone());
        }
    }

    pub fn set(&mut self, value: String) {
        self.begin_edit();
        self.value = value;
    }

    /// Finish editing; the returned value is always passed on, even if unchanged.
    pub fn confirm(&mut self) -> String {
        self.edit_origin = None;
        self.value.clone()
    }

    /// Abandon the edit and restore the value it started from
    pub fn cancel(&mut self) {
        if let Some(origin) = self.edit_origin.take() {
            self.value = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resets_once_per_identity_change() {
        let mut draft = TitleDraft::new("a", "Alpha");
        draft.set("Alpha (edited)".to_string());

        // Same identity, name changes many times: draft untouched
        let mut resets = 0;
        for name in ["Alpha 2", "Alpha 3", "Alpha 4"] {
            if draft.sync("a", name) {
                resets += 1;
            }
        }
        assert_eq!(resets, 0);
        assert_eq!(draft.value(), "Alpha (edited)");

        // New identity: reset exactly once
        for name in ["Beta", "Beta renamed"] {
            if draft.sync("b", name) {
                resets += 1;
            }
        }
        assert_eq!(resets, 1);
        assert_eq!(draft.value(), "Beta");
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_confirm_unchanged_value() {
        let mut draft = TitleDraft::new("a", "Same");
        draft.begin_edit();
        assert!(draft.is_editing());
        assert_eq!(draft.confirm(), "Same");
    }

    #[test]
    fn test_confirm_edited_value() {
        let mut draft = TitleDraft::new("a", "Old");
        draft.set("Ne".to_string());
        draft.set("New".to_string());
        assert!(draft.is_editing());
        assert_eq!(draft.confirm(), "New");
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_cancel_restores_origin() {
        let mut draft = TitleDraft::new("a", "Old");
        draft.set("Typo".to_string());
        draft.set("Typos".to_string());
        draft.cancel();
        assert_eq!(draft.value(), "Old");
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_cancel_without_edit_is_noop() {
        let mut draft = TitleDraft::new("a", "Old");
        draft.cancel();
        assert_eq!(draft.value(), "Old");
    }
}
