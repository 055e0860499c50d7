use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Continuous per-frame motion: object spin and pointer parallax.
pub struct MotionOptions {
    /// Spin added to rotation.x and rotation.y per second, in radians.
    #[schemars(title = "Spin Rate", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub spin_rate: f32,
    /// Rig offset per unit of normalized pointer offset.
    #[schemars(title = "Parallax", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub parallax_strength: f32,
    /// Rate at which the rig closes the gap to its parallax target, per
    /// second.
    #[schemars(title = "Damping", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub damping_rate: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            spin_rate: 0.1,
            parallax_strength: 0.5,
            damping_rate: 5.0,
        }
    }
}
