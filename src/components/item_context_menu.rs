//! Item Context Menu
//!
//! Actions on one note, shown in the header's "More" popover.
//!
//! The menu talks to the data interface directly. Starring from here writes
//! the note and reloads it instead of going through the header's `on_change`,
//! so it emits no star telemetry and leaves the save indicator untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::{MainContentContext, OverlaySearch};
use crate::data::DataHandle;
use crate::models::NoteItem;
use crate::tags::toggle_star;
use crate::telemetry::{events, use_telemetry};

#[component]
pub fn ItemContextMenu(
    #[prop(into)] item: Signal<NoteItem>,
    main_content: MainContentContext,
    data: DataHandle,
    overlay_search: OverlaySearch,
    /// Dismisses the surrounding popover
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let data = StoredValue::new(data);
    let telemetry = StoredValue::new(use_telemetry());

    let toggle_starred = move |_| {
        let current = item.get_untracked();
        let updated = current.with_tags(toggle_star(&current.tags));
        let data = data.get_value();
        spawn_local(async move {
            match data.update_item(&updated).await {
                Ok(_) => main_content.reload(),
                Err(e) => log::warn!("[MENU] failed to toggle star on {}: {}", updated.id, e),
            }
        });
        on_dismiss.run(());
    };

    let duplicate = move |_| {
        let id = item.with_untracked(|i| i.id.clone());
        let data = data.get_value();
        spawn_local(async move {
            match data.duplicate_item(&id).await {
                Ok(copy) => main_content.open_item(copy.id),
                Err(e) => log::warn!("[MENU] failed to duplicate {}: {}", id, e),
            }
        });
        on_dismiss.run(());
    };

    let find_similar = move |_| {
        overlay_search.open(Some(item.with_untracked(|i| i.name.clone())));
        on_dismiss.run(());
    };

    let close = move |_| {
        main_content.close_item(&item.with_untracked(|i| i.id.clone()));
        on_dismiss.run(());
    };

    let delete = move |_: ()| {
        let id = item.with_untracked(|i| i.id.clone());
        telemetry.with_value(|t| t.track(events::DELETE_FROM_CONTEXT_MENU));
        let data = data.get_value();
        spawn_local(async move {
            match data.delete_item(&id).await {
                Ok(()) => main_content.close_item(&id),
                Err(e) => log::warn!("[MENU] failed to delete {}: {}", id, e),
            }
        });
        on_dismiss.run(());
    };

    view! {
        <div class="menu">
            <button class="menu-item" on:click=toggle_starred>
                {move || if item.with(NoteItem::is_starred) { "Unstar" } else { "Star" }}
            </button>
            <button class="menu-item" on:click=duplicate>"Duplicate"</button>
            <button class="menu-item" on:click=find_similar>"Find similar notes"</button>
            <button class="menu-item" on:click=close>"Close"</button>
            <div class="menu-divider"></div>
            <DeleteConfirmButton on_confirm=delete />
        </div>
    }
}
