//! Section transition animator.

use glam::Vec3;

use super::runner::TransitionRunner;
use super::transition::Transition;
use crate::scene::SceneObject;

/// Plays eased rotation transitions on scene objects.
///
/// Every [`start`](Self::start) registers an independent runner keyed to
/// one object. Runners on different objects never interact. A second
/// runner on the same object stacks on top of the first, so the object
/// continues from wherever it currently is. Each frame
/// [`update`](Self::update) writes the in-flight offsets; finished runners
/// fold their full offset into the object's settled offset and are
/// removed.
#[derive(Debug, Clone, Default)]
pub struct TransitionAnimator {
    transition: Transition,
    runners: Vec<TransitionRunner>,
}

impl TransitionAnimator {
    /// Animator playing `transition` on every start.
    #[must_use]
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            runners: Vec::new(),
        }
    }

    /// The transition played on each start.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Whether any transition is currently in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.runners.is_empty()
    }

    /// Number of running transitions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.runners.len()
    }

    /// Running transitions targeting `object`.
    pub fn runners_for(&self, object: usize) -> impl Iterator<Item = &TransitionRunner> {
        self.runners.iter().filter(move |r| r.object() == object)
    }

    /// Start a transition on `object` at clock time `now`.
    ///
    /// Indices at or past `object_count` are ignored and return `false`.
    pub fn start(&mut self, object: usize, now: f64, object_count: usize) -> bool {
        if object >= object_count {
            log::warn!(
                "transition for object {object} ignored ({object_count} objects)"
            );
            return false;
        }
        log::debug!("transition start: object {object} at {now:.3}s");
        self.runners
            .push(TransitionRunner::new(object, &self.transition, now));
        true
    }

    /// Advance all runners to `now` and write their offsets into
    /// `objects`. Returns the number of runners still active.
    pub fn update(&mut self, now: f64, objects: &mut [SceneObject]) -> usize {
        for object in objects.iter_mut() {
            object.set_in_flight_offset(Vec3::ZERO);
        }

        self.runners.retain(|runner| {
            let Some(object) = objects.get_mut(runner.object()) else {
                return false;
            };
            if runner.is_complete(now) {
                object.settle_offset(runner.offset());
                log::debug!("transition done: object {}", runner.object());
                false
            } else {
                let in_flight = object.in_flight_offset();
                object.set_in_flight_offset(in_flight + runner.contribution(now));
                true
            }
        });

        self.runners.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::EasingFunction;
    use crate::scene::ShapeKind;

    fn objects(n: usize) -> Vec<SceneObject> {
        (0..n)
            .map(|i| SceneObject::new(ShapeKind::Box, Vec3::new(0.0, -4.0 * i as f32, 0.0)))
            .collect()
    }

    fn linear(offset: Vec3, secs: u64) -> Transition {
        Transition {
            offset,
            duration: Duration::from_secs(secs),
            easing: EasingFunction::Linear,
        }
    }

    #[test]
    fn runs_to_completion_and_settles() {
        let mut objs = objects(2);
        let mut animator = TransitionAnimator::default();
        assert!(animator.start(1, 0.0, objs.len()));

        assert_eq!(animator.update(0.75, &mut objs), 1);
        assert_eq!(objs[1].transition_offset(), Vec3::new(3.0, 1.5, 0.75));
        assert_eq!(objs[0].transition_offset(), Vec3::ZERO);

        assert_eq!(animator.update(1.5, &mut objs), 0);
        assert_eq!(objs[1].transition_offset(), Vec3::new(6.0, 3.0, 1.5));
        assert!(!animator.is_animating());

        // Settled offset persists after the runner is gone.
        assert_eq!(animator.update(5.0, &mut objs), 0);
        assert_eq!(objs[1].transition_offset(), Vec3::new(6.0, 3.0, 1.5));
    }

    #[test]
    fn runners_on_different_objects_are_independent() {
        let mut objs = objects(3);
        let mut animator = TransitionAnimator::new(linear(Vec3::X, 2));
        let _ = animator.start(0, 0.0, 3);
        let _ = animator.start(2, 1.0, 3);

        assert_eq!(animator.update(1.0, &mut objs), 2);
        assert_eq!(objs[0].transition_offset(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(objs[1].transition_offset(), Vec3::ZERO);
        assert_eq!(objs[2].transition_offset(), Vec3::ZERO);

        assert_eq!(animator.update(2.0, &mut objs), 1);
        assert_eq!(objs[0].transition_offset(), Vec3::X);
        assert_eq!(objs[2].transition_offset(), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn retrigger_continues_additively() {
        let mut objs = objects(1);
        let mut animator = TransitionAnimator::new(linear(Vec3::X, 2));
        let _ = animator.start(0, 0.0, 1);
        let _ = animator.update(1.0, &mut objs);
        assert_eq!(objs[0].transition_offset(), Vec3::new(0.5, 0.0, 0.0));

        let _ = animator.start(0, 1.0, 1);
        assert_eq!(animator.runners_for(0).count(), 2);
        assert_eq!(animator.update(1.0, &mut objs), 2);
        assert_eq!(objs[0].transition_offset(), Vec3::new(0.5, 0.0, 0.0));

        let _ = animator.update(2.0, &mut objs);
        assert_eq!(objs[0].transition_offset(), Vec3::new(1.5, 0.0, 0.0));

        assert_eq!(animator.update(3.0, &mut objs), 0);
        assert_eq!(objs[0].transition_offset(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_start_is_ignored() {
        let mut animator = TransitionAnimator::default();
        assert!(!animator.start(4, 0.0, 4));
        assert!(!animator.is_animating());
    }

    #[test]
    fn transition_does_not_touch_spin() {
        let mut objs = objects(1);
        objs[0].add_spin(0.25);
        let mut animator = TransitionAnimator::default();
        let _ = animator.start(0, 0.0, 1);
        let _ = animator.update(10.0, &mut objs);
        assert_eq!(objs[0].spin(), Vec3::new(0.25, 0.25, 0.0));
        assert_eq!(objs[0].rotation(), Vec3::new(6.25, 3.25, 1.5));
    }
}
