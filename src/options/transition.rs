use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// The rotation played on an object when its section becomes active.
pub struct TransitionOptions {
    /// Relative rotation added over the transition, in radians (x, y, z).
    #[schemars(skip)]
    pub rotation_offset: [f32; 3],
    /// Transition length in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Progress curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            rotation_offset: [6.0, 3.0, 1.5],
            duration_secs: 1.5,
            easing: EasingFunction::CubicInOut,
        }
    }
}
