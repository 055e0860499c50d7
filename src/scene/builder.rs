use glam::Vec3;

use super::object::{SceneObject, ShapeKind};
use super::particles::ParticleField;
use super::Scene;
use crate::camera::{Camera, CameraRig};
use crate::options::Options;
use crate::viewport::Viewport;

/// Fluent builder for [`Scene`].
///
/// ```
/// # use scrollscape::scene::SceneBuilder;
/// let scene = SceneBuilder::new().with_sections(4).build();
/// assert_eq!(scene.objects().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    options: Options,
    shapes: Vec<ShapeKind>,
    viewport: Viewport,
}

impl SceneBuilder {
    /// Builder with default options, the four default shapes and a default
    /// viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            shapes: ShapeKind::CYCLE.to_vec(),
            viewport: Viewport::default(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Use `count` sections, cycling through the default shapes.
    #[must_use]
    pub fn with_sections(mut self, count: usize) -> Self {
        self.shapes = ShapeKind::CYCLE.iter().copied().cycle().take(count).collect();
        self
    }

    /// Use an explicit shape per section.
    #[must_use]
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = ShapeKind>) -> Self {
        self.shapes = shapes.into_iter().collect();
        self
    }

    /// Initial viewport, used for the camera aspect ratio.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Consume the builder and produce a [`Scene`].
    ///
    /// Object `i` sits at `y = -spacing * i`, at `+offset_x` for even and
    /// `-offset_x` for odd sections.
    #[must_use]
    pub fn build(self) -> Scene {
        let scene_opts = &self.options.scene;
        let color = self.options.colors.material_color;

        let objects = self
            .shapes
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                let position = Vec3::new(
                    side * scene_opts.object_offset_x,
                    -scene_opts.section_spacing * i as f32,
                    0.0,
                );
                SceneObject::new(kind, position)
            })
            .collect::<Vec<_>>();

        let particles = ParticleField::generate(scene_opts, objects.len(), color);
        let camera = Camera::from_options(&self.options.camera, self.viewport.aspect());

        log::info!(
            "scene built: {} sections, {} particles",
            objects.len(),
            particles.len()
        );

        Scene {
            objects,
            particles,
            rig: CameraRig::new(camera),
            material_color: color,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_stack_downward_and_alternate_sides() {
        let scene = SceneBuilder::new().build();
        let positions: Vec<Vec3> = scene.objects().iter().map(SceneObject::position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-2.0, -4.0, 0.0),
                Vec3::new(2.0, -8.0, 0.0),
                Vec3::new(-2.0, -12.0, 0.0),
            ]
        );
        let kinds: Vec<ShapeKind> = scene.objects().iter().map(SceneObject::kind).collect();
        assert_eq!(kinds, ShapeKind::CYCLE.to_vec());
    }

    #[test]
    fn section_count_cycles_shapes() {
        let scene = SceneBuilder::new().with_sections(6).build();
        assert_eq!(scene.objects().len(), 6);
        assert_eq!(scene.objects()[4].kind(), ShapeKind::Torus);
        assert_eq!(scene.objects()[5].position().y, -20.0);
    }

    #[test]
    fn camera_uses_viewport_aspect() {
        let scene = SceneBuilder::new()
            .with_viewport(Viewport::new(1000.0, 500.0))
            .build();
        assert_eq!(scene.rig().camera.aspect, 2.0);
        assert_eq!(scene.rig().position, glam::Vec2::ZERO);
    }

    #[test]
    fn particles_take_material_color() {
        let mut opts = Options::default();
        opts.colors.material_color = crate::options::Color::rgb(1, 2, 3);
        let scene = SceneBuilder::new().with_options(opts).build();
        assert_eq!(scene.particles().color, scene.material_color());
    }
}
