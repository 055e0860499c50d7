//! Animation runner executes a single transition on one object.

use glam::Vec3;

use super::easing::EasingFunction;
use super::transition::Transition;

/// A running transition keyed to one scene object.
///
/// The runner holds:
/// - The target object index
/// - The relative offset and easing curve
/// - Timing, in clock seconds
#[derive(Debug, Clone)]
pub struct TransitionRunner {
    /// Index of the object this runner rotates.
    object: usize,
    /// Clock reading when the transition started.
    start: f64,
    /// Total duration in seconds.
    duration: f64,
    /// Full offset reached at completion.
    offset: Vec3,
    /// Progress curve.
    easing: EasingFunction,
}

impl TransitionRunner {
    /// Start `transition` on `object` at clock time `start`.
    #[must_use]
    pub fn new(object: usize, transition: &Transition, start: f64) -> Self {
        Self {
            object,
            start,
            duration: transition.duration.as_secs_f64(),
            offset: transition.offset,
            easing: transition.easing,
        }
    }

    /// Object this runner animates.
    #[must_use]
    pub fn object(&self) -> usize {
        self.object
    }

    /// Full offset applied once the runner completes.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Whether the runner has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offset contributed at `now`: the eased fraction of the full offset.
    #[must_use]
    pub fn contribution(&self, now: f64) -> Vec3 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.offset;
        }
        self.offset * self.easing.evaluate(t)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn linear_runner() -> TransitionRunner {
        let transition = Transition {
            offset: Vec3::new(2.0, 4.0, 6.0),
            duration: Duration::from_secs(2),
            easing: EasingFunction::Linear,
        };
        TransitionRunner::new(0, &transition, 10.0)
    }

    #[test]
    fn progress_is_clamped() {
        let runner = linear_runner();
        assert_eq!(runner.progress(9.0), 0.0);
        assert_eq!(runner.progress(11.0), 0.5);
        assert_eq!(runner.progress(20.0), 1.0);
        assert!(runner.is_complete(12.0));
        assert!(!runner.is_complete(11.9));
    }

    #[test]
    fn contribution_follows_easing() {
        let runner = linear_runner();
        assert_eq!(runner.contribution(10.0), Vec3::ZERO);
        assert_eq!(runner.contribution(11.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(runner.contribution(30.0), runner.offset());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let runner = TransitionRunner::new(3, &Transition::snap(Vec3::ONE), 5.0);
        assert!(runner.is_complete(5.0));
        assert_eq!(runner.contribution(5.0), Vec3::ONE);
        assert_eq!(runner.object(), 3);
    }
}
