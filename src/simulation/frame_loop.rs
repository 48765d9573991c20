use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::error::SceneError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Pending frame id plus whether the chain is still alive
#[derive(Debug, Default)]
struct LoopState {
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl LoopState {
    /// Store the outcome of a `requestAnimationFrame` call. A failure ends
    /// the chain.
    fn record(&self, scheduled: Result<i32, SceneError>) {
        match scheduled {
            Ok(id) => {
                self.pending.set(Some(id));
                self.running.set(true);
            }
            Err(e) => {
                log::error!("frame loop stopped: {e}");
                self.pending.set(None);
                self.running.set(false);
            }
        }
    }

    /// Claim the frame that is firing. `None` once cancelled.
    fn fire(&self) -> Option<i32> {
        self.pending.take()
    }

    fn stop(&self) -> Option<i32> {
        self.running.set(false);
        self.pending.take()
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Self-rescheduling requestAnimationFrame chain.
///
/// The loop owns its closure; `cancel` (or dropping the loop) cancels the
/// pending frame and releases the closure, so no frame runs afterwards.
pub struct FrameLoop {
    state: Rc<LoopState>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Schedule `on_frame(timestamp_ms)` on every animation frame
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<FrameLoop, SceneError> {
        let state = Rc::new(LoopState::default());
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_state = Rc::clone(&state);
        let next_callback = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            // Cancelled between scheduling and firing
            if next_state.fire().is_none() {
                return;
            }
            on_frame(timestamp);

            let scheduled = match next_callback.borrow().as_ref() {
                Some(cb) => request_animation_frame(cb),
                None => return,
            };
            next_state.record(scheduled);
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => request_animation_frame(cb)?,
            None => return Err(SceneError::ResourceCreation("frame callback")),
        };
        state.record(Ok(first));

        Ok(FrameLoop { state, callback })
    }

    /// The chain is alive: a frame is scheduled or one is running now
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.stop() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
        }
        // Breaks the closure -> callback cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_animation_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, SceneError> {
    let window = web_sys::window().ok_or_else(|| SceneError::Dom("no window".to_string()))?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| SceneError::Dom(format!("requestAnimationFrame failed: {e:?}")))
}
