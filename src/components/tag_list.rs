//! Tag List Component
//!
//! Shows a note's tags; in editing mode tags can be added and removed.
//!
//! Tag edits bypass the header's `on_change`: they are written straight to
//! the data interface and the open note is reloaded. The owner never sees
//! them, so the save indicator stays as it was; a failed write only shows
//! up in the log.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TagAutocomplete;
use crate::context::use_main_content;
use crate::data::use_data_interface;
use crate::models::NoteItem;
use crate::tags::{add_tag, remove_tag, visible_tags};

#[component]
pub fn TagList(
    #[prop(into)] data_item: Signal<NoteItem>,
    is_editing: bool,
    #[prop(into)] on_stop_editing: Callback<()>,
) -> impl IntoView {
    let shown_tags = Signal::derive(move || data_item.with(visible_tags));

    if !is_editing {
        return view! {
            <div class="tag-list">
                <For
                    each=move || shown_tags.get()
                    key=|tag| tag.clone()
                    children=|tag| view! { <span class="tag-chip">{tag}</span> }
                />
            </div>
        }
        .into_any();
    }

    // Editing mode
    let data = use_data_interface();
    let main_content = use_main_content();
    let (all_tags, set_all_tags) = signal(Vec::<String>::new());
    {
        let data = data.clone();
        spawn_local(async move {
            match data.list_tags().await {
                Ok(tags) => set_all_tags.set(tags),
                Err(e) => log::warn!("[TAGS] failed to list tags: {}", e),
            }
        });
    }

    let save_tags = move |tags: Vec<String>| {
        let item = data_item.get_untracked().with_tags(tags);
        let data = data.clone();
        spawn_local(async move {
            match data.update_item(&item).await {
                Ok(_) => main_content.reload(),
                Err(e) => log::warn!("[TAGS] failed to save tags for {}: {}", item.id, e),
            }
        });
    };

    let on_add = {
        let save_tags = save_tags.clone();
        move |name: String| {
            let tags = data_item.with_untracked(|item| add_tag(&item.tags, &name));
            save_tags(tags);
        }
    };

    view! {
        <div class="tag-list editing">
            <For
                each=move || shown_tags.get()
                key=|tag| tag.clone()
                children=move |tag| {
                    let save_tags = save_tags.clone();
                    let name = tag.clone();
                    view! {
                        <span class="tag-chip removable">
                            {tag}
                            <button
                                class="remove-tag-btn"
                                on:click=move |_| {
                                    let tags = data_item.with_untracked(|item| remove_tag(&item.tags, &name));
                                    save_tags(tags);
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                }
            />
            <TagAutocomplete all_tags=all_tags exclude=shown_tags on_select=on_add />
            <button class="done-btn" on:click=move |_| on_stop_editing.run(())>"Done"</button>
        </div>
    }
    .into_any()
}
