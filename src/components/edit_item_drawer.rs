//! Edit Item Drawer
//!
//! Side drawer for configuring a note (name, icon, color). Loads the note by id
//! when opened and writes through the data interface on save.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_main_content;
use crate::data::use_data_interface;
use crate::models::NoteItem;
use crate::time_format::format_absolute;

/// Icons offered in the drawer
pub const ICON_CHOICES: [&str; 6] = ["document", "book", "clipboard", "lightbulb", "star", "code"];

/// Open/close handle for one note's drawer
#[derive(Clone, Copy)]
pub struct EditItemDrawerHandle {
    pub is_open: RwSignal<bool>,
}

impl EditItemDrawerHandle {
    pub fn open(&self) {
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

pub fn use_edit_item_drawer() -> EditItemDrawerHandle {
    EditItemDrawerHandle {
        is_open: RwSignal::new(false),
    }
}

/// Empty strings mean "unset"
fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[component]
pub fn EditItemDrawer(
    handle: EditItemDrawerHandle,
    #[prop(into)] item_id: Signal<String>,
) -> impl IntoView {
    let data = StoredValue::new(use_data_interface());
    let main_content = use_main_content();

    let (loaded, set_loaded) = signal::<Option<NoteItem>>(None);
    let (name, set_name) = signal(String::new());
    let (icon, set_icon) = signal(String::new());
    let (color, set_color) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Load the note each time the drawer opens
    Effect::new(move |_| {
        if !handle.is_open.get() {
            return;
        }
        let id = item_id.get();
        let data = data.get_value();
        set_error.set(None);
        spawn_local(async move {
            match data.get_item(&id).await {
                Ok(Some(item)) => {
                    set_name.set(item.name.clone());
                    set_icon.set(item.icon.clone().unwrap_or_default());
                    set_color.set(item.color.clone().unwrap_or_default());
                    set_loaded.set(Some(item));
                }
                Ok(None) => set_error.set(Some(format!("Note {} no longer exists", id))),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let save = move |_| {
        let Some(item) = loaded.get_untracked() else { return; };
        let updated = NoteItem {
            name: name.get_untracked(),
            icon: non_empty(icon.get_untracked()),
            color: non_empty(color.get_untracked()),
            ..item
        };
        let data = data.get_value();
        spawn_local(async move {
            match data.update_item(&updated).await {
                Ok(_) => {
                    main_content.reload();
                    handle.close();
                }
                Err(e) => {
                    log::warn!("[DRAWER] failed to save {}: {}", updated.id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Show when=move || handle.is_open.get()>
            <div class="drawer-backdrop" on:click=move |_| handle.close()></div>
            <aside class="drawer">
                <div class="drawer-header">
                    <span class="drawer-title">"Configure document"</span>
                    <button class="close-btn" on:click=move |_| handle.close()>"×"</button>
                </div>

                {move || error.get().map(|e| view! { <div class="drawer-error">{e}</div> })}

                <div class="editor-section">
                    <label class="editor-label">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="editor-section">
                    <label class="editor-label">"Icon"</label>
                    <select
                        prop:value=move || icon.get()
                        on:change=move |ev| set_icon.set(event_target_value(&ev))
                    >
                        <option value="">"(default)"</option>
                        {ICON_CHOICES.iter().map(|choice| view! {
                            <option value=*choice>{*choice}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="editor-section">
                    <label class="editor-label">"Color"</label>
                    <input
                        type="text"
                        placeholder="#RRGGBB"
                        prop:value=move || color.get()
                        on:input=move |ev| set_color.set(event_target_value(&ev))
                    />
                </div>

                {move || loaded.get().map(|item| view! {
                    <div class="drawer-meta">
                        <div>"Created: " {format_absolute(item.created)}</div>
                        <div>"Last change: " {format_absolute(item.last_change)}</div>
                        <div>"Id: " {item.id}</div>
                    </div>
                })}

                <div class="drawer-actions">
                    <button class="primary" on:click=save>"Save"</button>
                    <button on:click=move |_| handle.close()>"Cancel"</button>
                </div>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" #fff ".to_string()), Some("#fff".to_string()));
    }
}
