/// Platform-agnostic input events.
///
/// Hosts translate their native events (DOM `scroll`/`mousemove`/`resize`,
/// or a replay script) into these and feed them to
/// [`ScrollEngine::handle_event`](crate::ScrollEngine::handle_event).
///
/// # Example
///
/// ```ignore
/// engine.handle_event(InputEvent::Scroll { y: 400.0 }, &mut renderer);
/// engine.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0 },
///     &mut renderer,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Page scrolled to an absolute vertical offset.
    Scroll {
        /// Scroll offset from the top of the page in pixels.
        y: f32,
    },
    /// Pointer moved to absolute client coordinates.
    PointerMoved {
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// Viewport resized.
    Resized {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
        /// Device pixel ratio at the time of the resize.
        device_pixel_ratio: f32,
    },
}
