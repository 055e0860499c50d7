//! Scroll position tracking.

/// Raw scroll offset plus the section derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Scroll offset from the top of the page in pixels.
    pub raw_scroll_y: f32,
    /// Active section index, kept in sync by the section mapper.
    pub section: usize,
}

/// Records every scroll event without debouncing.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    /// Tracker at the top of the page, section 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new raw offset. Returns `true` when the value changed.
    pub fn record(&mut self, y: f32) -> bool {
        let changed = self.state.raw_scroll_y != y;
        self.state.raw_scroll_y = y;
        changed
    }

    /// Store the section the mapper settled on.
    pub fn set_section(&mut self, section: usize) {
        self.state.section = section;
    }

    /// Current scroll state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }
}
