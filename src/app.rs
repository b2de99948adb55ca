//! Note Editor App
//!
//! Owns the open note: loads it, persists header changes and body edits, and
//! reports the save state back to the header.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{EditorHeader, OverlaySearchPanel};
use crate::config::HeaderConfig;
use crate::context::{MainContentContext, OverlaySearch};
use crate::data::{DataHandle, MemoryDataInterface, TauriDataInterface};
use crate::models::{NoteItem, SaveIndicatorState};
use crate::store::{
    store_clear_item, store_open_item, store_report, store_update_item, AppState,
    AppStateStoreFields, AppStore,
};
use crate::telemetry::{LogTelemetry, Telemetry};

/// Data interface for this environment; outside Tauri an in-memory store with sample notes
fn create_data_interface() -> (DataHandle, Option<String>) {
    if commands::is_tauri() {
        log::info!("[APP] using Tauri backend");
        return (DataHandle::new(TauriDataInterface), None);
    }

    log::info!("[APP] no Tauri backend, using in-memory notes");
    let memory = MemoryDataInterface::new();
    let samples = [
        ("Welcome", &["getting-started"][..], "Click the title to rename this note."),
        ("Groceries", &["home", "__starred"][..], "- milk\n- eggs"),
        ("Sprint planning", &["work", "meetings"][..], ""),
    ];
    let mut first = None;
    for (name, tags, content) in samples {
        match memory.insert(name, tags, content) {
            Ok(item) => {
                first.get_or_insert(item.id);
            }
            Err(e) => log::error!("[APP] failed to seed note {:?}: {}", name, e),
        }
    }
    (DataHandle::new(memory), first)
}

#[component]
pub fn App(config: HeaderConfig) -> impl IntoView {
    let (data, initial_item) = create_data_interface();
    let data_store = StoredValue::new(data.clone());

    let telemetry = if config.telemetry_enabled {
        Telemetry::new(LogTelemetry)
    } else {
        Telemetry::noop()
    };

    let store: AppStore = AppStore::new(AppState::default());
    let current_item = signal::<Option<String>>(initial_item);
    let reload_trigger = signal(0u32);
    let main_content = MainContentContext::new(current_item, reload_trigger);
    let overlay_search = OverlaySearch::new();

    // Provide context to all children
    provide_context(config);
    provide_context(main_content);
    provide_context(overlay_search);
    provide_context(data);
    provide_context(telemetry);

    // Track which note is loaded so a reload keeps the body and save state
    let (loaded_id, set_loaded_id) = signal::<Option<String>>(None);

    // Load the open note when it changes or a reload is requested
    Effect::new(move |_| {
        let _ = main_content.reload_trigger.get();
        let Some(id) = main_content.current_item.get() else {
            set_loaded_id.set(None);
            store_clear_item(&store);
            return;
        };
        let same_note = loaded_id.get_untracked().as_deref() == Some(id.as_str());
        let data = data_store.get_value();
        spawn_local(async move {
            match data.get_item(&id).await {
                Ok(Some(item)) if same_note => store_update_item(&store, item),
                Ok(Some(item)) => {
                    let content = data.get_content(&id).await.unwrap_or_else(|e| {
                        log::warn!("[APP] failed to load content of {}: {}", id, e);
                        String::new()
                    });
                    log::debug!("[APP] opened {}", id);
                    store_open_item(&store, item, content);
                    set_loaded_id.set(Some(id));
                }
                Ok(None) => {
                    log::warn!("[APP] note {} not found", id);
                    main_content.close_item(&id);
                }
                Err(e) => log::error!("[APP] failed to load {}: {}", id, e),
            }
        });
    });

    // Header changes: show them right away, then persist
    let on_change = move |changed: NoteItem| {
        store_update_item(&store, changed.clone());
        store_report(&store, &changed.id, SaveIndicatorState::Saving);
        let data = data_store.get_value();
        spawn_local(async move {
            match data.update_item(&changed).await {
                Ok(saved) => {
                    store_update_item(&store, saved);
                    store_report(&store, &changed.id, SaveIndicatorState::Saved);
                }
                Err(e) => {
                    log::error!("[APP] failed to save {}: {}", changed.id, e);
                    store_report(&store, &changed.id, SaveIndicatorState::Unsaved);
                }
            }
        });
    };

    // Body edits are saved on blur
    let open_item_id = move || store.open_item().with_untracked(|item| item.as_ref().map(|i| i.id.clone()));
    let save_content = move || {
        if store.save_state().get_untracked() != Some(SaveIndicatorState::Unsaved) {
            return;
        }
        let Some(id) = open_item_id() else {
            return;
        };
        let content = store.content().get_untracked();
        store_report(&store, &id, SaveIndicatorState::Saving);
        let data = data_store.get_value();
        spawn_local(async move {
            match data.set_content(&id, &content).await {
                Ok(()) => {
                    if let Ok(Some(item)) = data.get_item(&id).await {
                        store_update_item(&store, item);
                    }
                    store_report(&store, &id, SaveIndicatorState::Saved);
                }
                Err(e) => {
                    log::error!("[APP] failed to save content of {}: {}", id, e);
                    store_report(&store, &id, SaveIndicatorState::Unsaved);
                }
            }
        });
    };

    let has_open_item = Memo::new(move |_| store.open_item().with(Option::is_some));
    let open_item = Signal::derive(move || store.open_item().get().unwrap_or_default());
    let save_state = Signal::derive(move || store.save_state().get());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <div class="toolbar">
                    <button on:click=move |_| overlay_search.open(None)>"Search notes"</button>
                </div>

                <Show
                    when=move || has_open_item.get()
                    fallback=|| view! { <p class="empty-state">"No note open."</p> }
                >
                    <EditorHeader data_item=open_item on_change=on_change save_indicator=save_state />
                    <textarea
                        class="note-body"
                        prop:value=move || store.content().get()
                        on:input=move |ev| {
                            store.content().set(event_target_value(&ev));
                            if let Some(id) = open_item_id() {
                                store_report(&store, &id, SaveIndicatorState::Unsaved);
                            }
                        }
                        on:blur=move |_| save_content()
                        placeholder="Write something..."
                    ></textarea>
                </Show>
            </main>

            <OverlaySearchPanel />
        </div>
    }
}
