//! Save Indicator
//!
//! Smooths the owner's reported save state into what the header shows.
//! A report of `Saved` after any other state flashes `RecentlySaved` first;
//! the flash reverts to `Saved` when its timer fires, unless a newer report
//! arrived in the meantime.

use crate::models::SaveIndicatorState;

/// Handle for one armed flash. Only the newest ticket can end the flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTicket(u64);

#[derive(Debug, Clone)]
pub struct SaveIndicator {
    shown: SaveIndicatorState,
    generation: u64,
    /// Note the shown state belongs to
    item_id: Option<String>,
}

impl Default for SaveIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveIndicator {
    pub fn new() -> Self {
        Self {
            shown: SaveIndicatorState::Saved,
            generation: 0,
            item_id: None,
        }
    }

    pub fn shown(&self) -> SaveIndicatorState {
        self.shown
    }

    pub fn tracks(&self, item_id: &str) -> bool {
        self.item_id.as_deref() == Some(item_id)
    }

    /// Apply a newly reported state.
    ///
    /// Returns a ticket when a flash was armed; the caller schedules
    /// [`SaveIndicator::expire`] with it after the flash duration.
    /// A missing report leaves everything untouched, including a pending flash.
    pub fn report(&mut self, reported: Option<SaveIndicatorState>) -> Option<FlashTicket> {
        let reported = reported?;
        self.generation += 1;

        if reported == SaveIndicatorState::Saved && self.shown != SaveIndicatorState::Saved {
            self.shown = SaveIndicatorState::RecentlySaved;
            Some(FlashTicket(self.generation))
        } else {
            self.shown = reported;
            None
        }
    }

    /// Start over for another note: adopt its reported state without a
    /// flash and invalidate every outstanding ticket.
    pub fn reset(&mut self, item_id: &str, reported: Option<SaveIndicatorState>) {
        self.generation += 1;
        self.item_id = Some(item_id.to_string());
        self.shown = match reported {
            None | Some(SaveIndicatorState::RecentlySaved) => SaveIndicatorState::Saved,
            Some(state) => state,
        };
    }

    /// Apply a report for `item_id`, resetting first if it is a different note
    pub fn observe(&mut self, item_id: &str, reported: Option<SaveIndicatorState>) -> Option<FlashTicket> {
        if !self.tracks(item_id) {
            self.reset(item_id, reported);
            return None;
        }
        self.report(reported)
    }

    /// End the flash for `ticket`. Stale tickets are ignored.
    pub fn expire(&mut self, ticket: FlashTicket) -> bool {
        if ticket.0 != self.generation || self.shown != SaveIndicatorState::RecentlySaved {
            return false;
        }
        self.shown = SaveIndicatorState::Saved;
        true
    }
}

/// Timer backend for the flash
pub trait FlashScheduler {
    type Handle;

    /// Arrange for `ticket` to come back through [`FlashController::fire`]
    /// after `delay_ms`
    fn schedule(&mut self, delay_ms: u32, ticket: FlashTicket) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// [`SaveIndicator`] plus the one timer it may have pending.
///
/// At most one flash timer is alive: arming a new one, switching notes, or
/// shutting down cancels the previous one.
pub struct FlashController<S: FlashScheduler> {
    indicator: SaveIndicator,
    scheduler: S,
    pending: Option<S::Handle>,
    delay_ms: u32,
}

impl<S: FlashScheduler> FlashController<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            indicator: SaveIndicator::new(),
            scheduler,
            pending: None,
            delay_ms,
        }
    }

    pub fn shown(&self) -> SaveIndicatorState {
        self.indicator.shown()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed the owner's report for `item_id`. Returns the new shown state,
    /// or `None` when the report was ignored.
    pub fn observe(&mut self, item_id: &str, reported: Option<SaveIndicatorState>) -> Option<SaveIndicatorState> {
        if reported.is_none() && self.indicator.tracks(item_id) {
            return None;
        }
        let ticket = self.indicator.observe(item_id, reported);
        self.cancel_pending();
        if let Some(ticket) = ticket {
            self.pending = Some(self.scheduler.schedule(self.delay_ms, ticket));
        }
        Some(self.indicator.shown())
    }

    /// Timer callback. Returns the new shown state if `ticket` was current.
    pub fn fire(&mut self, ticket: FlashTicket) -> Option<SaveIndicatorState> {
        if !self.indicator.expire(ticket) {
            return None;
        }
        self.pending = None;
        Some(self.indicator.shown())
    }

    pub fn shutdown(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// Visual intent of the save tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    None,
    Primary,
    Success,
}

impl Intent {
    pub fn class(self) -> &'static str {
        match self {
            Intent::None => "intent-none",
            Intent::Primary => "intent-primary",
            Intent::Success => "intent-success",
        }
    }
}

/// Text, icon and intent for one indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveIndicatorDisplay {
    pub text: &'static str,
    pub icon: Option<&'static str>,
    pub intent: Intent,
}

impl SaveIndicatorDisplay {
    pub fn for_state(state: Option<SaveIndicatorState>) -> Self {
        let (text, icon, intent) = match state {
            Some(SaveIndicatorState::Saved) => ("Unchanged", None, Intent::None),
            Some(SaveIndicatorState::Unsaved) => ("Changed", Some("edit"), Intent::None),
            Some(SaveIndicatorState::Saving) => ("Saving...", Some("floppy-disk"), Intent::Primary),
            Some(SaveIndicatorState::RecentlySaved) => ("Saved", Some("tick-circle"), Intent::Success),
            None => ("Unknown save state", None, Intent::None),
        };
        Self { text, icon, intent }
    }
}
