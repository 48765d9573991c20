use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::core::timer::PerfTimer;
use crate::domain::config::SceneKind;
use crate::domain::error::SceneError;
use crate::render::SceneRenderer;

use super::frame_loop::FrameLoop;
use super::frame_stats::FrameStats;
use super::SceneCore;

/// Core plus the GPU side it draws with; shared with the frame loop and
/// the DOM listeners.
struct SceneState {
    core: SceneCore,
    renderer: Option<SceneRenderer>,
}

type SharedState = Rc<RefCell<SceneState>>;

/// DOM listener kept alive until the scene is torn down
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Listener, SceneError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| SceneError::Dom(format!("addEventListener({event}) failed: {e:?}")))?;
        Ok(Listener {
            target: target.clone(),
            event,
            closure,
        })
    }

    fn detach(&self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log::warn!("removeEventListener({}) failed: {e:?}", self.event);
        }
    }
}

/// One scene window bound to a canvas.
///
/// A scene whose WebGL context or shaders could not be created stays
/// alive but inert: it never schedules a frame.
#[wasm_bindgen]
pub struct Scene {
    kind: SceneKind,
    state: SharedState,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl Scene {
    /// Bind a scene of `kind` ("cube" | "dice") to the canvas with id
    /// `surface_id` and start rendering.
    ///
    /// Bad arguments (unknown kind, malformed config, missing canvas) are
    /// returned as errors. GPU failures are logged and produce an inert
    /// scene instead.
    pub fn create(surface_id: &str, kind: &str, config_json: &str) -> Result<Scene, JsValue> {
        Ok(create_scene(surface_id, kind, config_json)?)
    }

    /// Stop the frame loop, remove listeners and free GPU resources.
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        self.teardown();
    }

    /// Throw the dice (dice scenes only). Returns `false` when ignored.
    pub fn throw_dice(&mut self) -> bool {
        match self.state.try_borrow_mut() {
            Ok(mut st) => st.core.throw_dice(),
            Err(_) => false,
        }
    }

    /// A frame loop is running
    pub fn is_rendering(&self) -> bool {
        self.frame_loop.as_ref().map_or(false, FrameLoop::is_running)
    }

    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.as_str().to_string()
    }

    /// Debug counters for the last frame
    pub fn frame_stats(&self) -> FrameStats {
        match self.state.try_borrow() {
            Ok(st) => {
                let loaded = st.renderer.as_ref().map_or(0, SceneRenderer::textures_loaded);
                st.core.stats().with_textures_loaded(loaded)
            }
            Err(_) => FrameStats::default(),
        }
    }
}

impl Scene {
    fn teardown(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        if let Ok(mut st) = self.state.try_borrow_mut() {
            if st.renderer.take().is_some() {
                log::debug!("{} scene released its GPU resources", self.kind);
            }
        }
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub(super) fn create_scene(
    surface_id: &str,
    kind: &str,
    config_json: &str,
) -> Result<Scene, SceneError> {
    let core = SceneCore::from_json(kind, config_json)?;
    let kind = core.kind();
    let canvas = find_canvas(surface_id)?;

    let renderer = match SceneRenderer::new(&canvas, kind, core.config()) {
        Ok(r) => Some(r),
        Err(e) => {
            log::error!("{kind} scene on '{surface_id}' disabled: {e}");
            None
        }
    };
    let active = renderer.is_some();

    let state: SharedState = Rc::new(RefCell::new(SceneState { core, renderer }));
    let mut scene = Scene {
        kind,
        state,
        frame_loop: None,
        listeners: Vec::new(),
    };
    if !active {
        return Ok(scene);
    }

    if kind == SceneKind::Dice {
        // On error the scene is dropped and detaches what was installed
        install_dice_controls(&canvas, &scene.state, &mut scene.listeners)?;
    }
    scene.frame_loop = Some(start_frame_loop(&scene.state)?);
    log::info!("{kind} scene started on '{surface_id}'");
    Ok(scene)
}

fn find_canvas(surface_id: &str) -> Result<HtmlCanvasElement, SceneError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SceneError::Dom("no document".to_string()))?;
    document
        .get_element_by_id(surface_id)
        .ok_or_else(|| SceneError::Dom(format!("no element with id '{surface_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SceneError::Dom(format!("'{surface_id}' is not a canvas")))
}

fn start_frame_loop(state: &SharedState) -> Result<FrameLoop, SceneError> {
    let state = Rc::clone(state);
    FrameLoop::start(move |timestamp| {
        let Ok(mut st) = state.try_borrow_mut() else {
            return;
        };
        let SceneState { core, renderer } = &mut *st;
        let Some(renderer) = renderer.as_ref() else {
            return;
        };

        core.advance(timestamp);

        let timer = PerfTimer::start();
        let plan = core.plan_frame(renderer.aspect());
        renderer.draw(&plan);
        core.record_draw_ms(timer.elapsed_ms());
    })
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
    if let Err(e) = canvas.style().set_property("cursor", cursor) {
        log::warn!("setting cursor to {cursor} failed: {e:?}");
    }
}

/// Orbit/zoom on the canvas, Space on the document throws
fn install_dice_controls(
    canvas: &HtmlCanvasElement,
    state: &SharedState,
    listeners: &mut Vec<Listener>,
) -> Result<(), SceneError> {
    let target: &EventTarget = canvas.as_ref();

    {
        let state = Rc::clone(state);
        let canvas = canvas.clone();
        listeners.push(Listener::attach(target, "mousedown", move |event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else { return };
            if let Ok(mut st) = state.try_borrow_mut() {
                st.core.pointer_down(e.client_x() as f32, e.client_y() as f32);
                set_cursor(&canvas, st.core.camera().cursor());
            }
        })?);
    }
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(target, "mousemove", move |event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else { return };
            if let Ok(mut st) = state.try_borrow_mut() {
                st.core.pointer_move(e.client_x() as f32, e.client_y() as f32);
            }
        })?);
    }
    {
        let state = Rc::clone(state);
        let canvas = canvas.clone();
        listeners.push(Listener::attach(target, "mouseup", move |_| {
            if let Ok(mut st) = state.try_borrow_mut() {
                st.core.pointer_up();
                set_cursor(&canvas, st.core.camera().cursor());
            }
        })?);
    }
    {
        let state = Rc::clone(state);
        let canvas = canvas.clone();
        listeners.push(Listener::attach(target, "mouseleave", move |_| {
            if let Ok(mut st) = state.try_borrow_mut() {
                st.core.pointer_leave();
                set_cursor(&canvas, "default");
            }
        })?);
    }
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(target, "wheel", move |event| {
            let Some(e) = event.dyn_ref::<WheelEvent>() else { return };
            e.prevent_default();
            if let Ok(mut st) = state.try_borrow_mut() {
                st.core.wheel(e.delta_y() as f32);
            }
        })?);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SceneError::Dom("no document".to_string()))?;
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(document.as_ref(), "keydown", move |event| {
            let Some(e) = event.dyn_ref::<KeyboardEvent>() else { return };
            if let Ok(mut st) = state.try_borrow_mut() {
                if st.core.key_down(&e.code(), e.repeat()) {
                    e.prevent_default();
                }
            }
        })?);
    }

    set_cursor(canvas, "grab");
    Ok(())
}
