//! Editor Header
//!
//! Header above the note editor: editable title, star toggle, edit/created
//! times, save status, tag list and the configure/more actions.
//!
//! Changes to the note are handed to `on_change` as a full replacement item;
//! the owner persists them and reports the outcome back via `save_indicator`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{
    use_edit_item_drawer, EditItemDrawer, EditableTitle, ItemContextMenu, RelativeTime,
    SaveStatusTag, TagList,
};
use crate::config::use_header_config;
use crate::context::{use_main_content, use_overlay_search};
use crate::data::use_data_interface;
use crate::models::{NoteItem, SaveIndicatorState};
use crate::save_indicator::{FlashController, FlashScheduler, FlashTicket};
use crate::tags::toggle_star;
use crate::telemetry::{events, use_telemetry, TelemetryEvent};
use crate::title_draft::TitleDraft;

/// Where the tag list renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagListSlot {
    /// Read-only, next to the action buttons
    ReadOnlyInline,
    /// Editable, below the header
    EditableLower,
}

/// Whether the header is in tag-edit mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagEditMode {
    editing: bool,
}

impl TagEditMode {
    /// "Edit Tags" clicked
    pub fn enter(&mut self) {
        self.editing = true;
    }

    /// The tag list reported it is done
    pub fn finish(&mut self) {
        self.editing = false;
    }

    pub fn slot(&self) -> TagListSlot {
        if self.editing {
            TagListSlot::EditableLower
        } else {
            TagListSlot::ReadOnlyInline
        }
    }
}

/// The replacement item and usage event for a click on the star
pub fn star_change(item: &NoteItem) -> (NoteItem, TelemetryEvent) {
    let event = if item.is_starred() {
        events::UNSTAR_FROM_NOTE_CONTAINER
    } else {
        events::STAR_FROM_NOTE_CONTAINER
    };
    (item.with_tags(toggle_star(&item.tags)), event)
}

/// Flash timers backed by `gloo_timers`; a fired timer posts its ticket to `fired`
struct TimeoutScheduler {
    fired: RwSignal<Option<FlashTicket>>,
}

impl FlashScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay_ms: u32, ticket: FlashTicket) -> Timeout {
        let fired = self.fired;
        Timeout::new(delay_ms, move || {
            fired.try_set(Some(ticket));
        })
    }

    fn cancel(&mut self, handle: Timeout) {
        handle.cancel();
    }
}

#[component]
pub fn EditorHeader(
    #[prop(into)] data_item: Signal<NoteItem>,
    #[prop(into)] on_change: Callback<NoteItem>,
    #[prop(optional, into)] save_indicator: MaybeProp<SaveIndicatorState>,
) -> impl IntoView {
    let main_content = use_main_content();
    let data = StoredValue::new(use_data_interface());
    let overlay_search = use_overlay_search();
    let telemetry = StoredValue::new(use_telemetry());
    let flash_ms = use_header_config().flash_duration_ms;

    let draft = RwSignal::new(data_item.with_untracked(|item| TitleDraft::new(&item.id, &item.name)));
    let tag_mode = RwSignal::new(TagEditMode::default());
    let (menu_open, set_menu_open) = signal(false);
    let drawer = use_edit_item_drawer();

    // Draft follows the item identity, not its name
    let item_id = Memo::new(move |_| data_item.with(|item| item.id.clone()));
    Effect::new(move |_| {
        let id = item_id.get();
        let name = data_item.with_untracked(|item| item.name.clone());
        draft.maybe_update(|d| d.sync(&id, &name));
    });

    // Save indicator with the "Saved" flash, reset whenever another note is shown
    let shown = RwSignal::new(SaveIndicatorState::Saved);
    let fired = RwSignal::new(None::<FlashTicket>);
    let flash = StoredValue::new_local(FlashController::new(TimeoutScheduler { fired }, flash_ms));
    let reported = Memo::new(move |_| save_indicator.get());
    Effect::new(move |_| {
        let id = item_id.get();
        let reported = reported.get();
        let mut next = None;
        flash.update_value(|flash| next = flash.observe(&id, reported));
        if let Some(state) = next {
            shown.set(state);
        }
    });
    Effect::new(move |_| {
        let Some(ticket) = fired.get() else {
            return;
        };
        let mut next = None;
        flash.update_value(|flash| next = flash.fire(ticket));
        if let Some(state) = next {
            shown.set(state);
        }
    });
    on_cleanup(move || {
        flash.update_value(|flash| flash.shutdown());
    });
    let shown_state = Signal::derive(move || Some(shown.get()));

    let on_title_confirm = move |name: String| {
        on_change.run(data_item.get_untracked().with_name(name));
    };

    let on_star_click = move |_| {
        let (changed, event) = data_item.with_untracked(star_change);
        on_change.run(changed);
        telemetry.with_value(|t| t.track(event));
    };

    let on_configure_click = move |_| {
        telemetry.with_value(|t| t.track(events::OPEN_CONFIGURE_DRAWER));
        drawer.open();
    };

    let tag_slot = Memo::new(move |_| tag_mode.with(TagEditMode::slot));
    let stop_editing_tags = move |_: ()| tag_mode.update(TagEditMode::finish);

    let icon = move || {
        data_item.with(|item| item.icon.clone().unwrap_or_else(|| "document".to_string()))
    };
    let icon_style = move || {
        data_item.with(|item| item.color.as_ref().map(|c| format!("color: {};", c)).unwrap_or_default())
    };
    let star_icon = move || {
        if data_item.with(NoteItem::is_starred) { "★" } else { "☆" }
    };

    view! {
        <header class="page-header editor-header">
            <div class="page-header-main">
                <span class=move || format!("page-header-icon icon icon-{}", icon()) style=icon_style data-icon=icon></span>
                <div class="page-header-titles">
                    <div class="page-header-title">
                        <EditableTitle draft=draft on_confirm=on_title_confirm />
                        <button
                            class="star-btn minimal large"
                            title=move || if data_item.with(NoteItem::is_starred) { "Unstar" } else { "Star" }
                            on:click=on_star_click
                        >
                            {star_icon}
                        </button>
                    </div>
                    <div class="page-header-subtext">
                        "Edited "
                        <RelativeTime timestamp=Signal::derive(move || data_item.with(|item| item.last_change)) />
                        ", created "
                        <RelativeTime timestamp=Signal::derive(move || data_item.with(|item| item.created)) />
                        ". "
                        <SaveStatusTag state=shown_state />
                    </div>
                </div>

                <div class="page-header-right">
                    <div class="page-header-actions">
                        <button class="outlined" on:click=move |_| tag_mode.update(TagEditMode::enter)>"🏷 Edit Tags"</button>
                        " "
                        <button class="outlined" on:click=on_configure_click>"⚙ Configure document"</button>
                        " "
                        <span class="popover-anchor">
                            <button class="outlined" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                                "More ▾"
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="popover-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                                <div class="popover bottom">
                                    <ItemContextMenu
                                        item=data_item
                                        main_content=main_content
                                        data=data.get_value()
                                        overlay_search=overlay_search
                                        on_dismiss=move |_| set_menu_open.set(false)
                                    />
                                </div>
                            </Show>
                        </span>
                    </div>
                    <Show when=move || tag_slot.get() == TagListSlot::ReadOnlyInline>
                        <div>
                            <TagList data_item=data_item is_editing=false on_stop_editing=stop_editing_tags />
                        </div>
                    </Show>
                </div>
            </div>

            <Show when=move || tag_slot.get() == TagListSlot::EditableLower>
                <div class="page-header-lower">
                    <TagList data_item=data_item is_editing=true on_stop_editing=stop_editing_tags />
                </div>
            </Show>
        </header>

        <EditItemDrawer handle=drawer item_id=item_id />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InternalTag;

    #[test]
    fn test_tag_edit_mode_swaps_lists() {
        let mut mode = TagEditMode::default();
        assert_eq!(mode.slot(), TagListSlot::ReadOnlyInline);

        mode.enter();
        assert_eq!(mode.slot(), TagListSlot::EditableLower);
        mode.enter();
        assert_eq!(mode.slot(), TagListSlot::EditableLower);

        mode.finish();
        assert_eq!(mode.slot(), TagListSlot::ReadOnlyInline);
        mode.finish();
        assert_eq!(mode.slot(), TagListSlot::ReadOnlyInline);
    }

    #[test]
    fn test_star_change_stars_and_tracks() {
        let item = NoteItem::new("n1", "Groceries", 0).with_tags(vec!["home".to_string()]);
        let (changed, event) = star_change(&item);

        assert_eq!(changed.id, "n1");
        assert_eq!(changed.name, "Groceries");
        assert_eq!(changed.tags, vec!["home".to_string(), InternalTag::Starred.as_str().to_string()]);
        assert!(changed.is_starred());
        assert_eq!(event, events::STAR_FROM_NOTE_CONTAINER);
    }

    #[test]
    fn test_star_change_unstars_and_tracks() {
        let starred = NoteItem::new("n1", "Groceries", 0)
            .with_tags(vec![InternalTag::Starred.as_str().to_string(), "home".to_string()]);
        let (changed, event) = star_change(&starred);

        assert_eq!(changed.tags, vec!["home".to_string()]);
        assert_eq!(event, events::UNSTAR_FROM_NOTE_CONTAINER);

        // Clicking again restores the star
        let (again, event) = star_change(&changed);
        assert!(again.is_starred());
        assert_eq!(event, events::STAR_FROM_NOTE_CONTAINER);
    }
}
