//! Browser host: window listeners and a `requestAnimationFrame` loop.
//!
//! The page owns drawing. Each frame, [`WebScene`] hands a packed
//! [`FrameSnapshot`] (`Float32Array`) to the JS `on_frame` callback. The
//! callback must not call back into the same `WebScene` synchronously.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Float32Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::clock::SystemClock;
use crate::engine::{FrameLoop, FrameScheduler, ScrollEngine};
use crate::error::ScrollscapeError;
use crate::options::{Color, Options};
use crate::render::{FrameSnapshot, Renderer};
use crate::scene::{Scene, SceneBuilder};
use crate::viewport::Viewport;

type Listener = Closure<dyn FnMut(web_sys::Event)>;
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn host_err(e: JsValue) -> ScrollscapeError {
    ScrollscapeError::Host(format!("{e:?}"))
}

fn window() -> Result<web_sys::Window, ScrollscapeError> {
    web_sys::window().ok_or_else(|| ScrollscapeError::Host("no window".into()))
}

fn window_viewport(window: &web_sys::Window) -> Result<Viewport, ScrollscapeError> {
    let width = window.inner_width().map_err(host_err)?.as_f64().unwrap_or(0.0);
    let height = window.inner_height().map_err(host_err)?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width as f32, height as f32)
        .with_device_pixel_ratio(window.device_pixel_ratio() as f32))
}

/// Forwards frames and resizes to JS callbacks.
struct JsRenderer {
    on_frame: Function,
    on_resize: Option<Function>,
}

impl Renderer for JsRenderer {
    fn set_size(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        let Some(cb) = &self.on_resize else { return };
        if let Err(e) = cb.call3(
            &JsValue::NULL,
            &width.into(),
            &height.into(),
            &pixel_ratio.into(),
        ) {
            log::error!("resize callback failed: {e:?}");
        }
    }

    fn render(&mut self, scene: &Scene) -> Result<(), ScrollscapeError> {
        let floats = FrameSnapshot::capture(scene).to_floats();
        let array = Float32Array::from(floats.as_slice());
        let _ = self
            .on_frame
            .call1(&JsValue::NULL, &array)
            .map_err(|e| ScrollscapeError::Render(format!("{e:?}")))?;
        Ok(())
    }
}

/// Requests the next frame from the browser.
///
/// The slot owns the frame closure, and the closure owns a scheduler
/// holding the slot. [`RafScheduler::cancel`] breaks that cycle.
#[derive(Clone)]
struct RafScheduler {
    window: web_sys::Window,
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
    fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            slot: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Called first thing in the frame callback.
    fn fired(&self) {
        self.pending.set(None);
    }

    /// Cancel the queued frame and drop the frame closure.
    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel frame {id}: {e:?}");
            }
        }
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => drop(slot.take()),
            Err(_) => log::warn!("frame callback busy, not released"),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<(), ScrollscapeError> {
        let slot = self.slot.borrow();
        let Some(cb) = slot.as_ref() else {
            log::debug!("frame callback released, not requeuing");
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(host_err)?;
        self.pending.set(Some(id));
        Ok(())
    }
}

struct HostState {
    engine: ScrollEngine<SystemClock>,
    renderer: JsRenderer,
    frame_loop: FrameLoop,
}

/// A scroll-driven scene bound to the browser window.
#[wasm_bindgen]
pub struct WebScene {
    window: web_sys::Window,
    state: Rc<RefCell<HostState>>,
    listeners: Vec<(&'static str, Listener)>,
    frames: Option<RafScheduler>,
}

#[wasm_bindgen]
impl WebScene {
    /// Build the scene for `sections` sections.
    ///
    /// `on_frame(floats)` receives the packed snapshot each frame;
    /// `on_resize(width, height, pixelRatio)` is optional. `options_toml`
    /// overrides the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        sections: usize,
        on_frame: Function,
        on_resize: Option<Function>,
        options_toml: Option<String>,
    ) -> Result<WebScene, JsValue> {
        options_toml
            .map_or_else(|| Ok(Options::default()), |text| Options::from_toml(&text))
            .and_then(|options| Self::build(sections, &options, on_frame, on_resize))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Attach listeners, sync to the current window and start the frame
    /// loop. Calling it again after [`stop`](Self::stop) restarts the scene.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.attach().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop the frame loop and detach the listeners. Also runs when JS
    /// frees the scene.
    pub fn stop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.frame_loop.stop();
        }
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        for (name, listener) in self.listeners.drain(..) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                log::warn!("failed to detach {name} listener: {e:?}");
            }
        }
    }

    /// Recolor the material from a `#rrggbb` string.
    #[wasm_bindgen(js_name = setMaterialColor)]
    pub fn set_material_color(&self, hex: &str) -> Result<(), JsValue> {
        let color: Color = hex
            .parse()
            .map_err(|e: ScrollscapeError| JsValue::from_str(&e.to_string()))?;
        let mut state = self
            .state
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("scene is busy"))?;
        state.engine.set_material_color(color);
        Ok(())
    }

    /// Active section index.
    #[must_use]
    pub fn section(&self) -> usize {
        self.state
            .try_borrow()
            .map(|s| s.engine.section())
            .unwrap_or_default()
    }

    /// JSON schema of the options a control panel may expose.
    #[wasm_bindgen(js_name = optionsSchema)]
    pub fn options_schema() -> Result<String, JsValue> {
        Options::schema_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Shape names in section order.
    #[must_use]
    pub fn shapes(&self) -> Array {
        let Ok(state) = self.state.try_borrow() else {
            return Array::new();
        };
        state
            .engine
            .scene()
            .objects()
            .iter()
            .map(|o| JsValue::from_str(o.kind().as_str()))
            .collect()
    }

    /// Particle positions as packed xyz floats.
    #[must_use]
    pub fn particles(&self) -> Float32Array {
        let Ok(state) = self.state.try_borrow() else {
            return Float32Array::new_with_length(0);
        };
        let floats: Vec<f32> = state
            .engine
            .scene()
            .particles()
            .positions
            .iter()
            .flat_map(|p| p.to_array())
            .collect();
        Float32Array::from(floats.as_slice())
    }
}

impl WebScene {
    fn build(
        sections: usize,
        options: &Options,
        on_frame: Function,
        on_resize: Option<Function>,
    ) -> Result<Self, ScrollscapeError> {
        let window = window()?;
        let viewport = window_viewport(&window)?;
        let scene = SceneBuilder::new()
            .with_options(options.clone())
            .with_sections(sections)
            .with_viewport(viewport)
            .build();
        let engine = ScrollEngine::new(scene, options, viewport);
        Ok(Self {
            window,
            state: Rc::new(RefCell::new(HostState {
                engine,
                renderer: JsRenderer {
                    on_frame,
                    on_resize,
                },
                frame_loop: FrameLoop::new(),
            })),
            listeners: Vec::new(),
            frames: None,
        })
    }

    fn listen(
        &mut self,
        name: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), ScrollscapeError> {
        let listener: Listener = Closure::new(handler);
        self.window
            .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            .map_err(host_err)?;
        self.listeners.push((name, listener));
        Ok(())
    }

    fn attach(&mut self) -> Result<(), ScrollscapeError> {
        if self.frames.is_some() {
            return Ok(());
        }

        {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;
            state.frame_loop = FrameLoop::new();
            let viewport = window_viewport(&self.window)?;
            state.engine.on_resize(
                viewport.width,
                viewport.height,
                viewport.device_pixel_ratio,
                &mut state.renderer,
            );
            let scroll_y = self.window.scroll_y().map_err(host_err)?;
            let _ = state.engine.on_scroll(scroll_y as f32);
        }

        let (state, window) = (Rc::clone(&self.state), self.window.clone());
        self.listen("scroll", move |_| {
            let Ok(y) = window.scroll_y() else { return };
            match state.try_borrow_mut() {
                Ok(mut s) => {
                    let _ = s.engine.on_scroll(y as f32);
                }
                Err(_) => log::warn!("scroll dropped: scene busy"),
            }
        })?;

        let state = Rc::clone(&self.state);
        self.listen("mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            if let Ok(mut s) = state.try_borrow_mut() {
                s.engine
                    .on_pointer_move(mouse.client_x() as f32, mouse.client_y() as f32);
            }
        })?;

        let (state, window) = (Rc::clone(&self.state), self.window.clone());
        self.listen("resize", move |_| {
            let viewport = match window_viewport(&window) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("resize ignored: {e}");
                    return;
                }
            };
            if let Ok(mut s) = state.try_borrow_mut() {
                let s = &mut *s;
                s.engine.on_resize(
                    viewport.width,
                    viewport.height,
                    viewport.device_pixel_ratio,
                    &mut s.renderer,
                );
            }
        })?;

        self.start_frames()
    }

    fn start_frames(&mut self) -> Result<(), ScrollscapeError> {
        let frames = RafScheduler::new(self.window.clone());
        let mut scheduler = frames.clone();
        let state = Rc::clone(&self.state);
        *frames.slot.borrow_mut() = Some(Closure::new(move || {
            scheduler.fired();
            let result = {
                let Ok(mut s) = state.try_borrow_mut() else {
                    log::warn!("frame skipped: scene busy");
                    if let Err(e) = scheduler.request_frame() {
                        log::error!("failed to requeue frame: {e}");
                    }
                    return;
                };
                let s = &mut *s;
                s.frame_loop.tick(&mut s.engine, &mut s.renderer, &mut scheduler)
            };
            if let Err(e) = result {
                log::error!("frame failed: {e}");
                wasm_bindgen::throw_str(&e.to_string());
            }
        }));

        let mut kick = frames.clone();
        self.frames = Some(frames);
        kick.request_frame()
    }
}

impl Drop for WebScene {
    fn drop(&mut self) {
        self.stop();
    }
}
