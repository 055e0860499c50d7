//! The scene: the object stack, the particle field and the camera rig.
//!
//! Built once by [`SceneBuilder`]; afterwards only transforms change
//! (object rotation, camera and rig position) plus the material color set
//! through [`Scene::set_material_color`].

mod builder;
mod object;
mod particles;

pub use builder::SceneBuilder;
pub use object::{SceneObject, ShapeKind};
pub use particles::ParticleField;

use crate::camera::CameraRig;
use crate::options::Color;

/// Everything the renderer draws.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    particles: ParticleField,
    rig: CameraRig,
    material_color: Color,
}

impl Scene {
    /// Objects in section order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable objects, for the frame updater and transition animator.
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// The particle field.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable camera rig.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// Split borrow of objects and rig for the frame updater.
    pub(crate) fn parts_mut(&mut self) -> (&mut [SceneObject], &mut CameraRig) {
        (&mut self.objects, &mut self.rig)
    }

    /// Color shared by the object material.
    #[must_use]
    pub fn material_color(&self) -> Color {
        self.material_color
    }

    /// Recolor the object material and the particles.
    ///
    /// This is the control-panel mutation point; it takes effect on the
    /// next render without going through the frame update.
    pub fn set_material_color(&mut self, color: Color) {
        self.material_color = color;
        self.particles.color = color;
        log::debug!("material color set to {color}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_color_recolors_particles() {
        let mut scene = SceneBuilder::new().build();
        let teal = Color::rgb(0x00, 0x80, 0x80);
        scene.set_material_color(teal);
        assert_eq!(scene.material_color(), teal);
        assert_eq!(scene.particles().color, teal);
    }
}
