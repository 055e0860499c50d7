//! Transition describes the one-shot rotation played when a section
//! becomes active.

use std::time::Duration;

use glam::Vec3;

use super::easing::EasingFunction;
use crate::options::TransitionOptions;

/// A relative rotation offset applied over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Rotation added to the object over the animation, in radians.
    pub offset: Vec3,
    /// Total animation length.
    pub duration: Duration,
    /// Curve mapping linear progress to offset fraction.
    pub easing: EasingFunction,
}

impl Transition {
    /// The section spin: +6, +3, +1.5 rad over 1.5 s, cubic ease-in-out.
    #[must_use]
    pub fn section_spin() -> Self {
        Self {
            offset: Vec3::new(6.0, 3.0, 1.5),
            duration: Duration::from_millis(1500),
            easing: EasingFunction::CubicInOut,
        }
    }

    /// Instant transition: the full offset lands on the first update.
    #[must_use]
    pub fn snap(offset: Vec3) -> Self {
        Self {
            offset,
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
        }
    }

    /// Build from configured options. Negative or non-finite durations
    /// become a snap.
    #[must_use]
    pub fn from_options(options: &TransitionOptions) -> Self {
        let duration = Duration::try_from_secs_f32(options.duration_secs)
            .unwrap_or(Duration::ZERO);
        Self {
            offset: Vec3::from_array(options.rotation_offset),
            duration,
            easing: options.easing,
        }
    }

    /// Use a different easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::section_spin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_spin_constants() {
        let t = Transition::section_spin();
        assert_eq!(t.offset, Vec3::new(6.0, 3.0, 1.5));
        assert_eq!(t.duration, Duration::from_millis(1500));
        assert_eq!(t.easing, EasingFunction::CubicInOut);
    }

    #[test]
    fn default_options_match_section_spin() {
        let t = Transition::from_options(&TransitionOptions::default());
        assert_eq!(t, Transition::section_spin());
    }

    #[test]
    fn negative_duration_becomes_snap() {
        let opts = TransitionOptions {
            duration_secs: -1.0,
            ..TransitionOptions::default()
        };
        assert_eq!(Transition::from_options(&opts).duration, Duration::ZERO);
    }

    #[test]
    fn builder_overrides_easing() {
        let t = Transition::snap(Vec3::X).with_easing(EasingFunction::QuadraticIn);
        assert_eq!(t.easing, EasingFunction::QuadraticIn);
        assert!(t.duration.is_zero());
    }
}
