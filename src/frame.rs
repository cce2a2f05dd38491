use crate::app::DialApp;
use crate::core::{DialEvent, FRAME_DT_MAX_SEC};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<DialApp>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(app: Rc<DialApp>) -> Self {
        Self {
            app,
            last_instant: Instant::now(),
        }
    }

    /// Advance time-driven state. Returns false once nothing is animating.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64().min(FRAME_DT_MAX_SEC);
        self.last_instant = now;

        if !self.app.is_animating() {
            return false;
        }
        self.app.dispatch(DialEvent::Frame { dt_sec });
        self.app.is_animating()
    }
}

/// Drive `frame` from requestAnimationFrame until it reports idle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] entrance finished, loop idle");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    frame_ctx.borrow_mut().last_instant = Instant::now();
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
