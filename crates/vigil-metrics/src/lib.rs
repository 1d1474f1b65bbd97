//! # vigil-metrics
//!
//! Turns prediction records into [`MetricsSummary`](vigil_core::MetricsSummary)
//! values, either over a whole set or partitioned into fixed-width,
//! non-overlapping time windows, and keeps a history of saved summaries.

pub mod summary;
pub mod tracker;
pub mod windows;

pub use summary::{summarize, summarize_at};
pub use tracker::MetricsTracker;
pub use windows::{summarize_windowed, WindowedSummary};
