//! UI Components
//!
//! Leptos components for the editor header and its collaborators.

mod editor_header;
mod editable_title;
mod relative_time;
mod save_status_tag;
mod tag_list;
mod tag_autocomplete;
mod edit_item_drawer;
mod item_context_menu;
mod delete_confirm_button;
mod overlay_search;

pub use editor_header::{EditorHeader, TagListSlot};
pub use editable_title::EditableTitle;
pub use relative_time::RelativeTime;
pub use save_status_tag::SaveStatusTag;
pub use tag_list::TagList;
pub use tag_autocomplete::TagAutocomplete;
pub use edit_item_drawer::{use_edit_item_drawer, EditItemDrawer, EditItemDrawerHandle};
pub use item_context_menu::ItemContextMenu;
pub use delete_confirm_button::DeleteConfirmButton;
pub use overlay_search::OverlaySearchPanel;
