use std::sync::Mutex;

/// Fire-and-forget event emission. Implementations must not fail the caller: an event that cannot
/// be delivered is dropped.
pub trait EventSink: Send + Sync {
    fn track_event(&self, name: &str, props: serde_json::Value);
}

/// Production wiring: events become structured log records under the `analytics` target, where a
/// collector can pick them up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn track_event(&self, name: &str, props: serde_json::Value) {
        tracing::info!(target: "analytics", event = name, props = %props, "Analytics event");
    }
}

/// Keeps every event in memory, in order. Handy to assert on what a component emitted.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<(String, serde_json::Value)> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for RecordingEventSink {
    fn track_event(&self, name: &str, props: serde_json::Value) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push((name.to_string(), props));
    }
}
