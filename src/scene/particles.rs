use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::{Color, SceneOptions};

/// Ambient starfield spread along the whole object column.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    /// Point positions.
    pub positions: Vec<Vec3>,
    /// Point color, tracks the material color.
    pub color: Color,
    /// Rendered point size (size-attenuated).
    pub size: f32,
}

impl ParticleField {
    /// Scatter `options.particle_count` points around `section_count`
    /// sections.
    ///
    /// X and Z are centered on zero. Y starts half a section above the
    /// first object and spans the full column below it.
    #[must_use]
    pub fn generate(options: &SceneOptions, section_count: usize, color: Color) -> Self {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let spacing = options.section_spacing;
        let column = spacing * section_count as f32;
        let positions = (0..options.particle_count)
            .map(|_| {
                Vec3::new(
                    (rng.random::<f32>() - 0.5) * options.particle_spread_x,
                    spacing * 0.5 - rng.random::<f32>() * column,
                    (rng.random::<f32>() - 0.5) * options.particle_spread_z,
                )
            })
            .collect();
        Self {
            positions,
            color,
            size: options.particle_size,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
