//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

/// Main content area: which note is open, plus a reload trigger
#[derive(Clone, Copy)]
pub struct MainContentContext {
    /// Currently open note - read
    pub current_item: ReadSignal<Option<String>>,
    /// Currently open note - write
    set_current_item: WriteSignal<Option<String>>,
    /// Trigger to reload the open note from the data interface - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the open note from the data interface - write
    set_reload_trigger: WriteSignal<u32>,
}

impl MainContentContext {
    pub fn new(
        current_item: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            current_item: current_item.0,
            set_current_item: current_item.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn open_item(&self, id: String) {
        log::debug!("[MAIN] open {}", id);
        self.set_current_item.set(Some(id));
    }

    /// Close `id` if it is the open note
    pub fn close_item(&self, id: &str) {
        if self.current_item.get_untracked().as_deref() == Some(id) {
            log::debug!("[MAIN] close {}", id);
            self.set_current_item.set(None);
        }
    }

    /// Trigger a reload of the open note
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_main_content() -> MainContentContext {
    expect_context::<MainContentContext>()
}

/// Overlay search: a modal that searches notes and opens the chosen one
#[derive(Clone, Copy)]
pub struct OverlaySearch {
    /// Initial query while open, None when closed
    pub query: RwSignal<Option<String>>,
}

impl OverlaySearch {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(None),
        }
    }

    pub fn open(&self, query: Option<String>) {
        self.query.set(Some(query.unwrap_or_default()));
    }

    pub fn close(&self) {
        self.query.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.query.with(Option::is_some)
    }
}

pub fn use_overlay_search() -> OverlaySearch {
    expect_context::<OverlaySearch>()
}
