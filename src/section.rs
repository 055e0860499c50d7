//! Maps scroll offsets to discrete sections and detects section changes.
//!
//! Each viewport height of scroll is one section. The boundary between two
//! sections sits at the half-viewport mark: the ratio
//! `raw_scroll_y / viewport_height` is rounded half up
//! (`floor(ratio + 0.5)`), so a ratio of exactly 0.5 already belongs to
//! section 1. Results are clamped to the available objects.

/// A detected move from one section to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    /// Section that was active before the scroll event.
    pub from: usize,
    /// Section that is active now.
    pub to: usize,
}

/// Tracks the active section and reports changes.
#[derive(Debug, Clone)]
pub struct SectionMapper {
    current: usize,
    section_count: usize,
}

impl SectionMapper {
    /// Mapper over `section_count` sections starting at section 0.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        Self {
            current: 0,
            section_count,
        }
    }

    /// Currently active section.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of sections the mapper clamps to.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Unclamped section index for a scroll offset, rounding half up.
    ///
    /// Returns `None` when `viewport_height` is not positive.
    #[must_use]
    pub fn raw_section(raw_scroll_y: f32, viewport_height: f32) -> Option<i64> {
        if viewport_height <= 0.0 || !raw_scroll_y.is_finite() {
            return None;
        }
        Some((raw_scroll_y / viewport_height + 0.5).floor() as i64)
    }

    /// Section index for a scroll offset, clamped to `[0, section_count)`.
    #[must_use]
    pub fn section_for(&self, raw_scroll_y: f32, viewport_height: f32) -> Option<usize> {
        if self.section_count == 0 {
            return None;
        }
        let raw = Self::raw_section(raw_scroll_y, viewport_height)?;
        let last = (self.section_count - 1) as i64;
        Some(raw.clamp(0, last) as usize)
    }

    /// Recompute the section for a new scroll offset.
    ///
    /// Returns a change only when the clamped section differs from the
    /// stored one. Jumping several sections at once yields a single
    /// change to the final section.
    pub fn update(&mut self, raw_scroll_y: f32, viewport_height: f32) -> Option<SectionChange> {
        let next = self.section_for(raw_scroll_y, viewport_height)?;
        if next == self.current {
            return None;
        }
        let change = SectionChange {
            from: self.current,
            to: next,
        };
        self.current = next;
        log::debug!("section {} -> {}", change.from, change.to);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_the_boundary() {
        let mapper = SectionMapper::new(4);
        assert_eq!(mapper.section_for(0.0, 800.0), Some(0));
        assert_eq!(mapper.section_for(399.0, 800.0), Some(0));
        assert_eq!(mapper.section_for(400.0, 800.0), Some(1));
        assert_eq!(mapper.section_for(800.0, 800.0), Some(1));
        assert_eq!(mapper.section_for(1200.0, 800.0), Some(2));
    }

    #[test]
    fn same_section_does_not_retrigger() {
        let mut mapper = SectionMapper::new(4);
        assert_eq!(
            mapper.update(800.0, 800.0),
            Some(SectionChange { from: 0, to: 1 })
        );
        assert_eq!(mapper.update(700.0, 800.0), None);
        assert_eq!(mapper.update(900.0, 800.0), None);
        assert_eq!(mapper.update(800.0, 800.0), None);
        assert_eq!(mapper.current(), 1);
    }

    #[test]
    fn skipping_a_section_fires_once() {
        let mut mapper = SectionMapper::new(4);
        assert_eq!(
            mapper.update(1600.0, 800.0),
            Some(SectionChange { from: 0, to: 2 })
        );
        assert_eq!(mapper.current(), 2);
    }

    #[test]
    fn out_of_range_offsets_clamp() {
        let mut mapper = SectionMapper::new(4);
        assert_eq!(
            mapper.update(100_000.0, 800.0),
            Some(SectionChange { from: 0, to: 3 })
        );
        assert_eq!(mapper.update(200_000.0, 800.0), None);
        assert_eq!(
            mapper.update(-5_000.0, 800.0),
            Some(SectionChange { from: 3, to: 0 })
        );
        assert_eq!(mapper.update(-10_000.0, 800.0), None);
    }

    #[test]
    fn raw_section_is_unclamped() {
        assert_eq!(SectionMapper::raw_section(-800.0, 800.0), Some(-1));
        assert_eq!(SectionMapper::raw_section(8000.0, 800.0), Some(10));
    }

    #[test]
    fn degenerate_inputs_never_fire() {
        let mut mapper = SectionMapper::new(4);
        assert_eq!(mapper.update(800.0, 0.0), None);
        assert_eq!(mapper.update(f32::NAN, 800.0), None);

        let mut empty = SectionMapper::new(0);
        assert_eq!(empty.update(800.0, 800.0), None);
    }
}
