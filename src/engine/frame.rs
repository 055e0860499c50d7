//! Per-frame transform math, free of engine state.

use glam::Vec2;

use crate::input::PointerState;

/// Spin to add to rotation.x and rotation.y for a frame of `delta`
/// seconds. Time-scaled, so it is independent of the refresh rate.
#[inline]
#[must_use]
pub fn spin_delta(delta: f32, rate: f32) -> f32 {
    delta * rate
}

/// Camera height for a scroll offset: one section spacing per viewport
/// height of scroll, downward. Continuous, not snapped to sections.
#[inline]
#[must_use]
pub fn scroll_camera_y(raw_scroll_y: f32, viewport_height: f32, spacing: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    -(raw_scroll_y / viewport_height) * spacing
}

/// Rig target for a pointer offset. Screen Y grows downward, world Y
/// upward, hence the sign flip.
#[inline]
#[must_use]
pub fn parallax_target(pointer: PointerState, strength: f32) -> Vec2 {
    Vec2::new(
        pointer.normalized_x * strength,
        -pointer.normalized_y * strength,
    )
}

/// One step of first-order damping of `current` toward `target`.
///
/// Closes `rate * delta` of the gap. The factor is capped at 1 so a long
/// stall (a hidden tab) lands on the target instead of overshooting it.
#[inline]
#[must_use]
pub fn damp_toward(current: Vec2, target: Vec2, rate: f32, delta: f32) -> Vec2 {
    let factor = (rate * delta).clamp(0.0, 1.0);
    current + (target - current) * factor
}
