//! Input handling: event types and the trackers that turn raw scroll and
//! pointer events into normalized state.

/// Platform-agnostic input events.
pub mod event;
/// Pointer normalization.
pub mod pointer;
/// Scroll offset tracking.
pub mod scroll;

pub use event::InputEvent;
pub use pointer::{PointerState, PointerTracker};
pub use scroll::{ScrollState, ScrollTracker};
