//! Pointer position normalization.

use crate::viewport::Viewport;

/// Pointer offset from the viewport center, as a fraction of its size.
///
/// Both axes lie in [-0.5, 0.5] for client coordinates inside the
/// viewport. `normalized_y` grows downward, like client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Horizontal offset, -0.5 at the left edge.
    pub normalized_x: f32,
    /// Vertical offset, -0.5 at the top edge.
    pub normalized_y: f32,
}

/// Stateless transform from client coordinates to [`PointerState`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker;

impl PointerTracker {
    /// Normalize `(x, y)` against `viewport`. No smoothing or clamping.
    ///
    /// Returns `None` for a zero-sized viewport.
    #[must_use]
    pub fn normalize(x: f32, y: f32, viewport: &Viewport) -> Option<PointerState> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        Some(PointerState {
            normalized_x: x / viewport.width - 0.5,
            normalized_y: y / viewport.height - 0.5,
        })
    }
}
