//! # vigil-observability
//!
//! Structured tracing for the monitor: subscriber setup, span definitions,
//! one `tracing` event function per [`MonitorEvent`](vigil_core::MonitorEvent),
//! and [`TracingSink`], the event sink that routes engine events into them.

pub mod sink;
pub mod tracing_setup;

pub use sink::TracingSink;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
