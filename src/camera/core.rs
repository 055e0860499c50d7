use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera looking down -Z from a position local to its rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Position relative to the parent rig. `y` carries scroll travel.
    pub position: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, distance)` configured from `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, options.distance),
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the view matrix for a camera whose rig sits at `parent`.
    #[must_use]
    pub fn build_view(&self, parent: Vec3) -> Mat4 {
        Mat4::look_to_rh(parent + self.position, Vec3::NEG_Z, Vec3::Y)
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range (wgpu/WebGPU
        // convention)
        Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, parent: Vec3) -> Mat4 {
        self.build_projection() * self.build_view(parent)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_in_front_of_origin() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 6.0));
        assert_eq!(cam.fovy, 35.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = Camera::default();
        let clip = cam.build_matrix(Vec3::ZERO) * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn parent_offset_moves_the_eye() {
        let cam = Camera::default();
        let clip = cam.build_matrix(Vec3::new(0.0, 1.0, 0.0)) * Vec3::ZERO.extend(1.0);
        // Rig raised, so the origin appears below center.
        assert!(clip.y / clip.w < 0.0);
    }
}
