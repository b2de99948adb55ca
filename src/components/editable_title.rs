//! Editable Title Component
//!
//! Inline text field for the note name. Focus starts an edit; Enter or blur
//! confirms it; Escape restores the text the edit started from.

use leptos::prelude::*;

use crate::title_draft::TitleDraft;

#[component]
pub fn EditableTitle(
    draft: RwSignal<TitleDraft>,
    #[prop(into)] on_confirm: Callback<String>,
) -> impl IntoView {
    let confirm = move || {
        if !draft.with_untracked(TitleDraft::is_editing) {
            return;
        }
        let value = draft.try_update(TitleDraft::confirm).unwrap_or_default();
        on_confirm.run(value);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                // Blur confirms
                let _ = event_target::<web_sys::HtmlElement>(&ev).blur();
            }
            "Escape" => {
                ev.prevent_default();
                draft.update(TitleDraft::cancel);
                let _ = event_target::<web_sys::HtmlElement>(&ev).blur();
            }
            _ => {}
        }
    };

    view! {
        <input
            type="text"
            class="editable-title"
            placeholder="Untitled"
            prop:value=move || draft.with(|d| d.value().to_string())
            on:focus=move |_| draft.update(TitleDraft::begin_edit)
            on:input=move |ev| draft.update(|d| d.set(event_target_value(&ev)))
            on:keydown=on_keydown
            on:blur=move |_| confirm()
        />
    }
}
