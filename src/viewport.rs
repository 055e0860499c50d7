//! Viewport dimensions shared by the section mapper, pointer tracker and
//! resize handling.

/// Viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Physical pixels per CSS pixel reported by the host.
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Viewport of the given size at a pixel ratio of 1.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Same viewport with a different device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Width / height, or 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Renderer pixel ratio: the device ratio capped at `max`.
    #[must_use]
    pub fn pixel_ratio(&self, max: f32) -> f32 {
        self.device_pixel_ratio.min(max)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
