//! Telemetry
//!
//! Fire-and-forget usage events. Components get the sink from context;
//! without one they fall back to a no-op sink.

use std::sync::Arc;

use leptos::prelude::*;

/// A usage event: (category, action)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub category: &'static str,
    pub action: &'static str,
}

impl TelemetryEvent {
    pub const fn new(category: &'static str, action: &'static str) -> Self {
        Self { category, action }
    }
}

pub mod events {
    use super::TelemetryEvent;

    pub const STAR_FROM_NOTE_CONTAINER: TelemetryEvent =
        TelemetryEvent::new("items", "star_from_note_container");
    pub const UNSTAR_FROM_NOTE_CONTAINER: TelemetryEvent =
        TelemetryEvent::new("items", "unstar_from_note_container");
    pub const OPEN_CONFIGURE_DRAWER: TelemetryEvent =
        TelemetryEvent::new("items", "open_configure_drawer");
    pub const DELETE_FROM_CONTEXT_MENU: TelemetryEvent =
        TelemetryEvent::new("items", "delete_from_context_menu");
}

pub trait TelemetrySink: Send + Sync {
    fn track_event(&self, event: &TelemetryEvent);
}

pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn track_event(&self, _event: &TelemetryEvent) {}
}

/// Writes events to the debug log
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn track_event(&self, event: &TelemetryEvent) {
        log::debug!("[TELEMETRY] {}/{}", event.category, event.action);
    }
}

/// Shared sink handle provided via context
#[derive(Clone)]
pub struct Telemetry(Arc<dyn TelemetrySink>);

impl Telemetry {
    pub fn new(sink: impl TelemetrySink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    pub fn noop() -> Self {
        Self::new(NoopTelemetry)
    }

    pub fn track(&self, event: TelemetryEvent) {
        self.0.track_event(&event);
    }
}

pub fn use_telemetry() -> Telemetry {
    use_context::<Telemetry>().unwrap_or_else(Telemetry::noop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<TelemetryEvent>>);

    impl TelemetrySink for Arc<Recording> {
        fn track_event(&self, event: &TelemetryEvent) {
            self.0.lock().unwrap().push(*event);
        }
    }

    #[test]
    fn test_track_forwards_to_sink() {
        let recording = Arc::new(Recording::default());
        let telemetry = Telemetry::new(recording.clone());

        telemetry.track(events::STAR_FROM_NOTE_CONTAINER);
        telemetry.track(events::UNSTAR_FROM_NOTE_CONTAINER);

        let seen = recording.0.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].action, "star_from_note_container");
        assert_eq!(seen[1].action, "unstar_from_note_container");
    }

    #[test]
    fn test_noop_sink_accepts_events() {
        Telemetry::noop().track(events::STAR_FROM_NOTE_CONTAINER);
    }
}
