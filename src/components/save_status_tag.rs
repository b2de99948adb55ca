//! Save Status Tag Component

use leptos::prelude::*;

use crate::models::SaveIndicatorState;
use crate::save_indicator::SaveIndicatorDisplay;

/// Minimal tag with icon showing the save state
#[component]
pub fn SaveStatusTag(#[prop(into)] state: Signal<Option<SaveIndicatorState>>) -> impl IntoView {
    let display = Memo::new(move |_| SaveIndicatorDisplay::for_state(state.get()));

    view! {
        <span class=move || format!("tag minimal save-status {}", display.get().intent.class())>
            {move || display.get().icon.map(|icon| view! {
                <span class=format!("icon icon-{}", icon) data-icon=icon></span>
            })}
            <span class="tag-text">{move || display.get().text}</span>
        </span>
    }
}
