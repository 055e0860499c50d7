//! Headless replay: sweeps the scroll offset down through every section
//! and back at 60 Hz on a manual clock, logging what the engine does.
//!
//! ```text
//! RUST_LOG=info scrollscape [options.toml]
//! ```

use std::path::PathBuf;

use scrollscape::clock::{Clock, ManualClock};
use scrollscape::engine::{FrameLoop, ManualScheduler};
use scrollscape::options::Options;
use scrollscape::render::RecordingRenderer;
use scrollscape::scene::SceneBuilder;
use scrollscape::viewport::Viewport;
use scrollscape::{ScrollEngine, ScrollscapeError};

const FRAME_SECS: f64 = 1.0 / 60.0;
/// Frames spent scrolling from one section to the next.
const FRAMES_PER_SECTION: usize = 45;
/// Frames held at the end of each leg so transitions can finish.
const SETTLE_FRAMES: usize = 120;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("replay failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScrollscapeError> {
    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(&path)?
        }
        None => Options::default(),
    };

    let viewport = Viewport::default();
    let scene = SceneBuilder::new()
        .with_options(options.clone())
        .with_viewport(viewport)
        .build();
    let section_count = scene.objects().len();
    let mut engine = ScrollEngine::with_clock(scene, &options, viewport, ManualClock::new());
    let mut renderer = RecordingRenderer::new();
    engine.on_resize(
        viewport.width,
        viewport.height,
        viewport.device_pixel_ratio,
        &mut renderer,
    );

    let bottom = section_count.saturating_sub(1) as f32 * viewport.height;
    let sweep = section_count.saturating_sub(1) * FRAMES_PER_SECTION;
    let mut offsets = Vec::with_capacity(2 * (sweep + SETTLE_FRAMES));
    for leg in [(0.0, bottom), (bottom, 0.0)] {
        offsets.extend((1..=sweep).map(|i| {
            let t = i as f32 / sweep as f32;
            leg.0 + (leg.1 - leg.0) * t
        }));
        offsets.extend(std::iter::repeat_n(leg.1, SETTLE_FRAMES));
    }

    let mut scheduler = ManualScheduler::primed();
    let mut frame_loop = FrameLoop::new();
    let mut offsets = offsets.into_iter();

    while scheduler.take_request() {
        let Some(y) = offsets.next() else {
            frame_loop.stop();
            break;
        };
        engine.clock().advance(FRAME_SECS);
        if let Some(change) = engine.on_scroll(y) {
            log::info!(
                "t={:.3}s scroll={y:.0} section {} -> {} ({})",
                engine.clock().elapsed(),
                change.from,
                change.to,
                engine.scene().objects()[change.to].kind().as_str(),
            );
        }
        let Some(stats) = frame_loop.tick(&mut engine, &mut renderer, &mut scheduler)?
        else {
            break;
        };
        if frame_loop.frames() % 60 == 0 {
            let rig = engine.scene().rig();
            log::info!(
                "frame {} camera.y={:.3} rig=({:.3}, {:.3}) transitions={}",
                frame_loop.frames(),
                rig.camera.position.y,
                rig.position.x,
                rig.position.y,
                stats.active_transitions,
            );
        }
    }

    log::info!(
        "replayed {} frames over {} sections, final section {}",
        frame_loop.frames(),
        section_count,
        engine.section(),
    );
    Ok(())
}
