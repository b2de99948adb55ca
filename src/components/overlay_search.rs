//! Overlay Search Component
//!
//! Modal note search. Picking a result opens it in the main content area.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_main_content, use_overlay_search};
use crate::data::use_data_interface;
use crate::models::NoteItem;

#[component]
pub fn OverlaySearchPanel() -> impl IntoView {
    let overlay = use_overlay_search();
    let main_content = use_main_content();
    let data = StoredValue::new(use_data_interface());

    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<NoteItem>::new());

    // Adopt the query the overlay was opened with
    Effect::new(move |_| {
        if let Some(initial) = overlay.query.get() {
            set_query.set(initial);
        }
    });

    // Search whenever the query changes while open
    Effect::new(move |_| {
        let q = query.get();
        if !overlay.is_open() {
            return;
        }
        let data = data.get_value();
        spawn_local(async move {
            match data.search_items(&q).await {
                Ok(found) => set_results.set(found),
                Err(e) => log::warn!("[SEARCH] query {:?} failed: {}", q, e),
            }
        });
    });

    let pick = move |id: String| {
        overlay.close();
        main_content.open_item(id);
    };

    view! {
        <Show when=move || overlay.is_open()>
            <div class="overlay-backdrop" on:click=move |_| overlay.close()></div>
            <div class="overlay-search">
                <input
                    type="text"
                    class="overlay-search-input"
                    placeholder="Search notes..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            overlay.close();
                        }
                    }
                />
                <div class="overlay-results">
                    <For
                        each=move || results.get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            let id = item.id.clone();
                            view! {
                                <button class="overlay-result" on:click=move |_| pick(id.clone())>
                                    {item.name}
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
