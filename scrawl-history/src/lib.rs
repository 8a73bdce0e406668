//! scrawl-history: the stroke timeline with bounded undo/redo, plus the
//! gesture recorder that feeds it.

pub mod history;
pub mod recorder;

pub use history::{DrawingHistory, SubscriptionId, DEFAULT_UNDO_DEPTH};
pub use recorder::PathRecorder;
