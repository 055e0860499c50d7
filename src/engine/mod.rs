//! The scroll engine: event handling and the per-frame update.
//!
//! Event handlers ([`ScrollEngine::on_scroll`],
//! [`ScrollEngine::on_pointer_move`], [`ScrollEngine::on_resize`]) run to
//! completion and only update the [`AnimationContext`] (plus, on a section
//! change, start a transition). [`ScrollEngine::update_frame`] then applies
//! one frame in a fixed order:
//!
//! 1. read the clock and compute the delta since the previous frame
//! 2. spin every object by `delta * spin_rate` around X and Y
//! 3. advance running section transitions
//! 4. move the camera to the scroll position
//! 5. damp the rig toward the pointer parallax target
//! 6. render once

mod context;
pub mod frame;
pub mod scheduler;

pub use context::AnimationContext;
pub use scheduler::{FrameLoop, FrameScheduler, ManualScheduler};

use crate::animation::{Transition, TransitionAnimator};
use crate::clock::{Clock, SystemClock};
use crate::error::ScrollscapeError;
use crate::input::{InputEvent, PointerTracker, ScrollTracker};
use crate::options::{Color, MotionOptions, Options};
use crate::render::Renderer;
use crate::scene::Scene;
use crate::section::{SectionChange, SectionMapper};
use crate::viewport::Viewport;

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Active section during the frame.
    pub section: usize,
    /// Transitions still running after the frame.
    pub active_transitions: usize,
}

/// Couples scroll, pointer and time into the scene's transforms.
pub struct ScrollEngine<C: Clock = SystemClock> {
    clock: C,
    context: AnimationContext,
    scene: Scene,
    scroll: ScrollTracker,
    sections: SectionMapper,
    animator: TransitionAnimator,
    motion: MotionOptions,
    section_spacing: f32,
    max_pixel_ratio: f32,
}

impl ScrollEngine<SystemClock> {
    /// Engine over `scene` timed by the wall clock, started now.
    #[must_use]
    pub fn new(scene: Scene, options: &Options, viewport: Viewport) -> Self {
        Self::with_clock(scene, options, viewport, SystemClock::start())
    }
}

impl<C: Clock> ScrollEngine<C> {
    /// Engine over `scene` in `viewport`, timed by `clock`.
    ///
    /// The camera aspect is synced to `viewport`; the renderer is not
    /// touched until the first [`on_resize`](Self::on_resize).
    #[must_use]
    pub fn with_clock(mut scene: Scene, options: &Options, viewport: Viewport, clock: C) -> Self {
        let sections = SectionMapper::new(scene.objects().len());
        scene.rig_mut().resize(viewport.aspect());
        Self {
            clock,
            context: AnimationContext::new(viewport),
            scene,
            scroll: ScrollTracker::new(),
            sections,
            animator: TransitionAnimator::new(Transition::from_options(&options.transition)),
            motion: options.motion.clone(),
            section_spacing: options.scene.section_spacing,
            max_pixel_ratio: options.camera.max_pixel_ratio,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The clock driving frames and transitions.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current context snapshot.
    #[must_use]
    pub fn context(&self) -> &AnimationContext {
        &self.context
    }

    /// The scene being animated.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Active section index.
    #[must_use]
    pub fn section(&self) -> usize {
        self.sections.current()
    }

    /// The transition animator.
    #[must_use]
    pub fn animator(&self) -> &TransitionAnimator {
        &self.animator
    }

    /// Recolor the scene material and particles.
    pub fn set_material_color(&mut self, color: Color) {
        self.scene.set_material_color(color);
    }

    // ── Events ──────────────────────────────────────────────────────────

    /// Dispatch a platform-agnostic input event.
    pub fn handle_event<R: Renderer + ?Sized>(
        &mut self,
        event: InputEvent,
        renderer: &mut R,
    ) -> Option<SectionChange> {
        match event {
            InputEvent::Scroll { y } => self.on_scroll(y),
            InputEvent::PointerMoved { x, y } => {
                self.on_pointer_move(x, y);
                None
            }
            InputEvent::Resized {
                width,
                height,
                device_pixel_ratio,
            } => {
                self.on_resize(width, height, device_pixel_ratio, renderer);
                None
            }
        }
    }

    /// Record a scroll offset and start a transition if the section
    /// changed.
    ///
    /// The section mapper runs on every call; it alone decides whether
    /// anything fires.
    pub fn on_scroll(&mut self, y: f32) -> Option<SectionChange> {
        let _ = self.scroll.record(y);
        let change = self.sections.update(y, self.context.viewport.height);
        if let Some(change) = change {
            self.scroll.set_section(change.to);
            let _ = self.animator.start(
                change.to,
                self.clock.elapsed(),
                self.scene.objects().len(),
            );
        }
        self.context.scroll = self.scroll.state();
        change
    }

    /// Record the pointer position in client coordinates.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(pointer) =
            PointerTracker::normalize(x, y, &self.context.viewport)
        {
            self.context.pointer = pointer;
        }
    }

    /// Apply a viewport resize to the camera and the renderer output.
    pub fn on_resize<R: Renderer + ?Sized>(
        &mut self,
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
        renderer: &mut R,
    ) {
        let viewport = Viewport::new(width, height)
            .with_device_pixel_ratio(device_pixel_ratio);
        self.context.viewport = viewport;
        self.scene.rig_mut().resize(viewport.aspect());
        renderer.set_size(width, height, viewport.pixel_ratio(self.max_pixel_ratio));
        log::debug!(
            "resized to {width}x{height} @{}",
            viewport.pixel_ratio(self.max_pixel_ratio)
        );
    }

    // ── Frame ───────────────────────────────────────────────────────────

    /// Apply one frame and render it.
    ///
    /// Render errors are returned unchanged; the state update of this frame
    /// has already been applied when that happens.
    pub fn update_frame<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<FrameStats, ScrollscapeError> {
        let elapsed = self.clock.elapsed();
        let delta = self.context.clock.advance(elapsed);

        let spin = frame::spin_delta(delta, self.motion.spin_rate);
        let (objects, rig) = self.scene.parts_mut();
        for object in objects.iter_mut() {
            object.add_spin(spin);
        }
        let active_transitions = self.animator.update(elapsed, objects);

        rig.camera.position.y = frame::scroll_camera_y(
            self.context.scroll.raw_scroll_y,
            self.context.viewport.height,
            self.section_spacing,
        );

        let target = frame::parallax_target(self.context.pointer, self.motion.parallax_strength);
        rig.position = frame::damp_toward(rig.position, target, self.motion.damping_rate, delta);

        renderer.render(&self.scene)?;

        Ok(FrameStats {
            delta,
            section: self.sections.current(),
            active_transitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::clock::ManualClock;
    use crate::render::RecordingRenderer;
    use crate::scene::SceneBuilder;

    fn engine_at(width: f32, height: f32) -> (ScrollEngine<ManualClock>, RecordingRenderer) {
        let mut renderer = RecordingRenderer::new();
        let mut engine = ScrollEngine::with_clock(
            SceneBuilder::new().build(),
            &Options::default(),
            Viewport::default(),
            ManualClock::new(),
        );
        engine.on_resize(width, height, 1.0, &mut renderer);
        (engine, renderer)
    }

    #[test]
    fn idle_frame_changes_nothing_but_still_renders() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        let before: Vec<Vec3> = engine.scene().objects().iter().map(|o| o.rotation()).collect();

        let stats = engine.update_frame(&mut renderer).unwrap();

        assert_eq!(stats.delta, 0.0);
        let after: Vec<Vec3> = engine.scene().objects().iter().map(|o| o.rotation()).collect();
        assert_eq!(before, after);
        assert_eq!(engine.scene().rig().position, Vec2::ZERO);
        assert_eq!(engine.scene().rig().camera.position.y, 0.0);
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn spin_is_exactly_delta_times_rate() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        engine.clock().set(0.5);
        let _ = engine.update_frame(&mut renderer).unwrap();
        for object in engine.scene().objects() {
            assert_eq!(object.spin(), Vec3::new(0.05, 0.05, 0.0));
            assert_eq!(object.transition_offset(), Vec3::ZERO);
        }
    }

    #[test]
    fn spin_tracks_delta_after_days_of_uptime() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        engine.clock().set(4.0 * 86_400.0);
        let _ = engine.update_frame(&mut renderer).unwrap();
        let start = engine.scene().objects()[0].spin().x;

        let mut total_delta = 0.0_f32;
        for _ in 0..60 {
            engine.clock().advance(1.0 / 60.0);
            total_delta += engine.update_frame(&mut renderer).unwrap().delta;
        }
        assert!((total_delta - 1.0).abs() < 1e-4);

        let gain = (engine.scene().objects()[0].spin().x - start).rem_euclid(std::f32::consts::TAU);
        assert!((gain - total_delta * 0.1).abs() < 1e-4);
    }

    #[test]
    fn camera_tracks_scroll_fraction() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        let _ = engine.on_scroll(200.0);
        let _ = engine.update_frame(&mut renderer).unwrap();
        assert_eq!(engine.scene().rig().camera.position.y, -1.0);
    }

    #[test]
    fn section_change_starts_one_transition() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        let change = engine.on_scroll(1600.0);
        assert_eq!(change, Some(SectionChange { from: 0, to: 2 }));
        assert_eq!(engine.animator().active_count(), 1);
        assert_eq!(engine.animator().runners_for(2).count(), 1);
        assert_eq!(engine.context().scroll.section, 2);

        // Further scrolling within section 2 does not retrigger.
        assert_eq!(engine.on_scroll(1700.0), None);
        assert_eq!(engine.on_scroll(1500.0), None);
        assert_eq!(engine.animator().active_count(), 1);

        engine.clock().set(1.5);
        let stats = engine.update_frame(&mut renderer).unwrap();
        assert_eq!(stats.active_transitions, 0);
        assert_eq!(stats.section, 2);
        let object = &engine.scene().objects()[2];
        assert_eq!(object.transition_offset(), Vec3::new(6.0, 3.0, 1.5));
        assert!(object.spin().abs_diff_eq(Vec3::new(0.15, 0.15, 0.0), 1e-6));
    }

    #[test]
    fn scrolling_past_the_end_clamps() {
        let (mut engine, _) = engine_at(1280.0, 800.0);
        assert_eq!(
            engine.on_scroll(80_000.0),
            Some(SectionChange { from: 0, to: 3 })
        );
        assert_eq!(engine.on_scroll(90_000.0), None);
        assert_eq!(engine.animator().runners_for(3).count(), 1);
    }

    #[test]
    fn parallax_damps_toward_pointer() {
        let (mut engine, mut renderer) = engine_at(1000.0, 800.0);
        engine.on_pointer_move(1000.0, 0.0);
        assert_eq!(engine.context().pointer.normalized_x, 0.5);
        assert_eq!(engine.context().pointer.normalized_y, -0.5);

        engine.clock().set(0.1);
        let _ = engine.update_frame(&mut renderer).unwrap();
        // target (0.25, 0.25), factor 5 * 0.1 = 0.5
        assert_eq!(engine.scene().rig().position, Vec2::new(0.125, 0.125));

        engine.clock().set(0.2);
        let _ = engine.update_frame(&mut renderer).unwrap();
        assert_eq!(engine.scene().rig().position, Vec2::new(0.1875, 0.1875));
    }

    #[test]
    fn resize_updates_aspect_and_pixel_ratio() {
        let (mut engine, mut renderer) = engine_at(1280.0, 800.0);
        let _ = engine.handle_event(
            InputEvent::Resized {
                width: 1600.0,
                height: 400.0,
                device_pixel_ratio: 3.0,
            },
            &mut renderer,
        );
        assert_eq!(engine.scene().rig().camera.aspect, 4.0);
        assert_eq!(renderer.size, Some((1600.0, 400.0, 2.0)));

        engine.on_resize(800.0, 800.0, 1.25, &mut renderer);
        assert_eq!(engine.scene().rig().camera.aspect, 1.0);
        assert_eq!(renderer.size, Some((800.0, 800.0, 1.25)));
    }

    #[test]
    fn construction_syncs_camera_aspect() {
        let engine = ScrollEngine::with_clock(
            SceneBuilder::new().build(),
            &Options::default(),
            Viewport::new(900.0, 300.0),
            ManualClock::new(),
        );
        assert_eq!(engine.scene().rig().camera.aspect, 3.0);
        assert_eq!(engine.context().viewport.height, 300.0);
    }

    #[test]
    fn render_error_propagates() {
        let (mut engine, _) = engine_at(1280.0, 800.0);
        let mut renderer = RecordingRenderer {
            fail_with: Some("device lost".into()),
            ..RecordingRenderer::new()
        };
        assert!(matches!(
            engine.update_frame(&mut renderer),
            Err(ScrollscapeError::Render(_))
        ));
    }

    #[test]
    fn material_color_bypasses_frame_update() {
        let (mut engine, _) = engine_at(1280.0, 800.0);
        let color = Color::rgb(10, 20, 30);
        engine.set_material_color(color);
        assert_eq!(engine.scene().particles().color, color);
    }
}
