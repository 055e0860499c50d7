use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Layout of the object column and the particle field.
pub struct SceneOptions {
    /// Vertical distance between consecutive objects (one section).
    #[schemars(skip)]
    pub section_spacing: f32,
    /// Horizontal offset of each object; the sign alternates per section.
    #[schemars(title = "Object Offset", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub object_offset_x: f32,
    /// Number of ambient particles.
    #[schemars(title = "Particles", range(min = 0, max = 2000))]
    pub particle_count: usize,
    /// Width of the particle field along X.
    #[schemars(skip)]
    pub particle_spread_x: f32,
    /// Depth of the particle field along Z.
    #[schemars(skip)]
    pub particle_spread_z: f32,
    /// Rendered point size of each particle.
    #[schemars(title = "Particle Size", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub particle_size: f32,
    /// Seed for particle placement.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            section_spacing: 4.0,
            object_offset_x: 2.0,
            particle_count: 200,
            particle_spread_x: 10.0,
            particle_spread_z: 30.0,
            particle_size: 0.03,
            seed: 0x5eed,
        }
    }
}
