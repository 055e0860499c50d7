//! Request-next-frame scheduling.
//!
//! The frame update never loops on its own. After each frame the
//! [`FrameLoop`] asks a [`FrameScheduler`] for one more callback, the way a
//! browser page calls `requestAnimationFrame` from inside its frame
//! callback. Stopping the loop simply means not asking again.

use super::{FrameStats, ScrollEngine};
use crate::clock::Clock;
use crate::error::ScrollscapeError;
use crate::render::Renderer;

/// Something that can run the next frame at the next display refresh.
pub trait FrameScheduler {
    /// Ask for exactly one more frame callback.
    fn request_frame(&mut self) -> Result<(), ScrollscapeError>;
}

/// Drives [`ScrollEngine::update_frame`] one refresh at a time.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    /// A running loop that has not rendered yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// Stop requeuing. A frame already requested becomes a no-op.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("frame loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Whether the loop will requeue after the next frame.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame, then request the next one if still running.
    ///
    /// Returns `Ok(None)` without touching the engine once stopped. A
    /// failed frame is returned as-is and nothing is requeued.
    pub fn tick<C, R, S>(
        &mut self,
        engine: &mut ScrollEngine<C>,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> Result<Option<FrameStats>, ScrollscapeError>
    where
        C: Clock,
        R: Renderer + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if !self.running {
            return Ok(None);
        }
        let stats = engine.update_frame(renderer)?;
        self.frames += 1;
        if self.running {
            scheduler.request_frame()?;
        }
        Ok(Some(stats))
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheduler for headless hosts: remembers that a frame was requested and
/// lets the host decide when to run it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    requested: bool,
}

impl ManualScheduler {
    /// Scheduler with one frame already requested, to kick off the loop.
    #[must_use]
    pub fn primed() -> Self {
        Self { requested: true }
    }

    /// Consume the pending request, if any.
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<(), ScrollscapeError> {
        self.requested = true;
        Ok(())
    }
}
