//! `requestAnimationFrame` plumbing for the render loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::engine::{Action, Engine};

type FrameClosure = Closure<dyn FnMut(f64)>;
type ClosureHolder = Rc<RefCell<Option<FrameClosure>>>;

/// Keeps a `requestAnimationFrame` loop alive; dropping it cancels the loop.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    callback: ClosureHolder,
}

impl FrameLoop {
    /// Start ticking `engine` once per animation frame.
    ///
    /// Actions produced by a frame are handed to `on_actions`; quiet
    /// frames skip the callback entirely.
    pub fn start<F>(engine: Rc<RefCell<Engine>>, mut on_actions: F) -> Self
    where
        F: FnMut(Vec<Action>) + 'static,
    {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: ClosureHolder = Rc::new(RefCell::new(None));

        let loop_raf_id = Rc::clone(&raf_id);
        let loop_callback = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            loop_raf_id.set(None);
            match engine.borrow_mut().frame(js_sys::Date::now()) {
                Ok(actions) => {
                    if !actions.is_empty() {
                        on_actions(actions);
                    }
                }
                Err(err) => log::warn!("frame failed: {err:?}"),
            }
            schedule(&loop_raf_id, &loop_callback);
        }) as Box<dyn FnMut(f64)>));

        schedule(&raf_id, &callback);
        Self { raf_id, callback }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window()
            && let Some(id) = self.raf_id.take()
            && window.cancel_animation_frame(id).is_err()
        {
            log::warn!("could not cancel the frame loop");
        }
        // The closure holds the Rc that holds the closure; dropping it
        // here breaks the cycle.
        self.callback.borrow_mut().take();
    }
}

fn schedule(raf_id: &Rc<Cell<Option<i32>>>, callback: &ClosureHolder) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to drive the frame loop");
        return;
    };
    let holder = callback.borrow();
    let Some(closure) = holder.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => raf_id.set(Some(id)),
        Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
    }
}
