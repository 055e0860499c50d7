use glam::{Vec2, Vec3};

use super::core::Camera;

/// Parent group of the camera.
///
/// The rig carries pointer parallax in its `(x, y)` position while the
/// child camera carries scroll travel in its own `y`, so the two compose
/// without interfering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Rig position; starts at zero and is only ever damped.
    pub position: Vec2,
    /// Child camera.
    pub camera: Camera,
}

impl CameraRig {
    /// Rig at the origin holding `camera`.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            position: Vec2::ZERO,
            camera,
        }
    }

    /// Rig position as a 3D parent offset.
    #[must_use]
    pub fn parent_offset(&self) -> Vec3 {
        self.position.extend(0.0)
    }

    /// World-space eye position: rig offset plus camera local position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.parent_offset() + self.camera.position
    }

    /// Update the camera aspect ratio after a viewport resize.
    pub fn resize(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_and_scroll_compose() {
        let mut rig = CameraRig::default();
        rig.position = Vec2::new(0.2, -0.1);
        rig.camera.position.y = -4.0;
        assert_eq!(rig.eye(), Vec3::new(0.2, -4.1, 6.0));
    }

    #[test]
    fn resize_sets_aspect() {
        let mut rig = CameraRig::default();
        rig.resize(2.0);
        assert_eq!(rig.camera.aspect, 2.0);
    }
}
