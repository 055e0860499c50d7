//! The renderer seam and the flat frame snapshot handed to foreign
//! renderers.
//!
//! Drawing itself (geometry, materials, lights) lives outside this crate.
//! A [`Renderer`] receives the fully updated [`Scene`] once per frame; a
//! host that renders elsewhere (a three.js scene, for instance) can turn it
//! into a [`FrameSnapshot`] and ship the packed floats across.

use crate::error::ScrollscapeError;
use crate::scene::Scene;

/// Draws the scene. Implemented by hosts.
pub trait Renderer {
    /// Resize the output surface. Called synchronously on every viewport
    /// resize, before the next frame renders.
    fn set_size(&mut self, width: f32, height: f32, pixel_ratio: f32);

    /// Draw one frame. Errors propagate to the caller of the frame update.
    fn render(&mut self, scene: &Scene) -> Result<(), ScrollscapeError>;
}

/// Camera state for one frame, packed for upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraTransform {
    /// Rig (parent) position; carries parallax.
    pub rig: [f32; 2],
    /// Camera position local to the rig; `y` carries scroll travel.
    pub local: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane.
    pub znear: f32,
    /// Far clipping plane.
    pub zfar: f32,
}

/// One object's transform, packed for upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectTransform {
    /// World position.
    pub position: [f32; 3],
    /// Effective XYZ Euler rotation in radians.
    pub rotation: [f32; 3],
}

/// Everything a foreign renderer needs to draw one frame.
///
/// [`to_floats`](Self::to_floats) lays it out as: 9 camera floats, 3
/// color floats, then 6 floats (position, rotation) per object.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Camera and rig.
    pub camera: CameraTransform,
    /// Material color as sRGB-encoded floats in [0, 1], not linearized.
    /// three.js `Color.setRGB` with `SRGBColorSpace` takes them as-is.
    pub color: [f32; 3],
    /// Objects in section order.
    pub objects: Vec<ObjectTransform>,
}

impl FrameSnapshot {
    /// Floats per object in the packed layout.
    pub const OBJECT_STRIDE: usize = 6;
    /// Floats before the first object in the packed layout.
    pub const HEADER_LEN: usize = 12;

    /// Capture the current transforms of `scene`.
    #[must_use]
    pub fn capture(scene: &Scene) -> Self {
        let rig = scene.rig();
        let camera = CameraTransform {
            rig: rig.position.to_array(),
            local: rig.camera.position.to_array(),
            aspect: rig.camera.aspect,
            fovy: rig.camera.fovy,
            znear: rig.camera.znear,
            zfar: rig.camera.zfar,
        };
        let objects = scene
            .objects()
            .iter()
            .map(|o| ObjectTransform {
                position: o.position().to_array(),
                rotation: o.rotation().to_array(),
            })
            .collect();
        Self {
            camera,
            color: scene.material_color().to_array(),
            objects,
        }
    }

    /// Pack into a flat float buffer.
    #[must_use]
    pub fn to_floats(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(
            Self::HEADER_LEN + self.objects.len() * Self::OBJECT_STRIDE,
        );
        out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&self.camera)));
        out.extend_from_slice(&self.color);
        out.extend_from_slice(bytemuck::cast_slice(&self.objects));
        out
    }
}

/// Renderer that draws nothing and records what it was asked to do.
///
/// Used by the headless replay and by tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Number of `render` calls.
    pub renders: usize,
    /// Arguments of the most recent `set_size` call.
    pub size: Option<(f32, f32, f32)>,
    /// Snapshot taken at the most recent `render` call.
    pub last_frame: Option<FrameSnapshot>,
    /// Error returned by every `render` call, if set.
    pub fail_with: Option<String>,
}

impl RecordingRenderer {
    /// A renderer that succeeds on every frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn set_size(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.size = Some((width, height, pixel_ratio));
    }

    fn render(&mut self, scene: &Scene) -> Result<(), ScrollscapeError> {
        if let Some(msg) = &self.fail_with {
            return Err(ScrollscapeError::Render(msg.clone()));
        }
        self.renders += 1;
        self.last_frame = Some(FrameSnapshot::capture(scene));
        Ok(())
    }
}
