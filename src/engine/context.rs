use crate::clock::ClockState;
use crate::input::{PointerState, ScrollState};
use crate::viewport::Viewport;

/// Everything the frame update reads besides the scene itself.
///
/// Event handlers write it; each frame reads a consistent copy of it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationContext {
    /// Latest scroll offset and active section.
    pub scroll: ScrollState,
    /// Latest normalized pointer offset.
    pub pointer: PointerState,
    /// Current viewport.
    pub viewport: Viewport,
    /// Clock readings of the last two frames.
    pub clock: ClockState,
}

impl AnimationContext {
    /// Context for a fresh page at `viewport`: top of the page, pointer
    /// centered, clock at zero.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Scroll progress in viewport heights (1.0 = one full section).
    #[must_use]
    pub fn scroll_fraction(&self) -> f32 {
        if self.viewport.height > 0.0 {
            self.scroll.raw_scroll_y / self.viewport.height
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_fraction_in_viewport_heights() {
        let mut ctx = AnimationContext::new(Viewport::new(1200.0, 800.0));
        ctx.scroll.raw_scroll_y = 1200.0;
        assert_eq!(ctx.scroll_fraction(), 1.5);
    }

    #[test]
    fn zero_height_has_no_progress() {
        let mut ctx = AnimationContext::new(Viewport::new(0.0, 0.0));
        ctx.scroll.raw_scroll_y = 1200.0;
        assert_eq!(ctx.scroll_fraction(), 0.0);
    }
}
