//! Working-time compliance calculator.
//!
//! A pure, read-side projection over a session's timing: no clock access, no
//! I/O and no state. The current instant is always passed in by the caller.

pub mod rules;
pub mod snapshot;
pub mod timeline;

pub use snapshot::{SessionTiming, compute_snapshot};
pub use timeline::{TimelineEvents, TimelineIter, build_timeline_events, timeline_at};
