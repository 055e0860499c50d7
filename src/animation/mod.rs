//! Animation system for section transitions.
//!
//! A [`Transition`] describes the relative rotation and its timing, a
//! [`TransitionRunner`] plays one transition on one object, and the
//! [`TransitionAnimator`] owns all running transitions and folds finished
//! ones into the objects they rotated.

pub mod animator;
pub mod easing;
pub mod runner;
pub mod transition;

pub use animator::TransitionAnimator;
pub use easing::EasingFunction;
pub use runner::TransitionRunner;
pub use transition::Transition;
