//! Tag Utilities
//!
//! Helpers for the star marker and the visible tag list.

use crate::models::{InternalTag, NoteItem};

/// Tag list with the star marker toggled.
///
/// Unstarring removes every star marker; starring appends one at the end.
/// Order of the other tags is preserved either way.
pub fn toggle_star(tags: &[String]) -> Vec<String> {
    let star = InternalTag::Starred.as_str();
    if tags.iter().any(|tag| tag == star) {
        tags.iter().filter(|tag| *tag != star).cloned().collect()
    } else {
        let mut toggled = tags.to_vec();
        toggled.push(star.to_string());
        toggled
    }
}

/// Tags shown to the user (reserved tags hidden)
pub fn visible_tags(item: &NoteItem) -> Vec<String> {
    item.tags
        .iter()
        .filter(|tag| !InternalTag::is_internal(tag))
        .cloned()
        .collect()
}

/// Add a user tag, ignoring blanks and case-insensitive duplicates
pub fn add_tag(tags: &[String], name: &str) -> Vec<String> {
    let name = name.trim();
    let mut updated = tags.to_vec();
    if name.is_empty() || tags.iter().any(|t| t.to_lowercase() == name.to_lowercase()) {
        return updated;
    }
    updated.push(name.to_string());
    updated
}

pub fn remove_tag(tags: &[String], name: &str) -> Vec<String> {
    tags.iter().filter(|t| *t != name).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_star_appends_marker() {
        let starred = toggle_star(&tags(&["a", "b"]));
        assert_eq!(starred, tags(&["a", "b", "__starred"]));
    }

    #[test]
    fn test_star_twice_restores_order() {
        let original = tags(&["zeta", "alpha", "mid"]);
        let round_trip = toggle_star(&toggle_star(&original));
        assert_eq!(round_trip, original);
    }

    #[test]
    fn test_unstar_from_middle_keeps_order() {
        let unstarred = toggle_star(&tags(&["a", "__starred", "b"]));
        assert_eq!(unstarred, tags(&["a", "b"]));
    }

    #[test]
    fn test_unstar_removes_duplicates() {
        let unstarred = toggle_star(&tags(&["__starred", "a", "__starred"]));
        assert_eq!(unstarred, tags(&["a"]));
    }

    #[test]
    fn test_visible_tags_hides_internal() {
        let item = NoteItem::new("n", "N", 0).with_tags(tags(&["work", "__starred", "home"]));
        assert_eq!(visible_tags(&item), tags(&["work", "home"]));
    }

    #[test]
    fn test_add_tag() {
        assert_eq!(add_tag(&tags(&["Work"]), " home "), tags(&["Work", "home"]));
        assert_eq!(add_tag(&tags(&["Work"]), "work"), tags(&["Work"]));
        assert_eq!(add_tag(&tags(&["Work"]), "  "), tags(&["Work"]));
    }

    #[test]
    fn test_remove_tag() {
        assert_eq!(remove_tag(&tags(&["a", "b", "c"]), "b"), tags(&["a", "c"]));
    }
}
