use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and output resolution parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Distance from the camera to the object column along +Z.
    #[schemars(title = "Distance", range(min = 2.0, max = 20.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Upper bound on the renderer pixel ratio.
    #[schemars(skip)]
    pub max_pixel_ratio: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 6.0,
            max_pixel_ratio: 2.0,
        }
    }
}
