use crate::events::MonitorEvent;

/// Destination for structured monitor events.
///
/// Every engine receives its sink at construction; nothing in the workspace
/// logs through a handle it did not get handed.
pub trait IEventSink: Send + Sync {
    fn emit(&self, event: &MonitorEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl IEventSink for NullSink {
    fn emit(&self, _event: &MonitorEvent) {}
}
