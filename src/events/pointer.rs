use crate::app::DialApp;
use crate::core::DialEvent;
use crate::input::{self, PanTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub app: Rc<DialApp>,
    pub pan: Rc<RefCell<PanTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerend(&w, "pointerup");
    wire_pointerend(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let dial_for_listener = w.app.dial_el.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // first gesture unlocks audio
        w.app.player.borrow().resume_if_suspended();

        let began = w
            .pan
            .borrow_mut()
            .begin(ev.pointer_id(), input::pointer_client_x(&ev));
        if began {
            _ = w.app.dial_el.set_pointer_capture(ev.pointer_id());
            w.app.dispatch(DialEvent::PanStart);
            log::debug!("[pointer] pan start id={}", ev.pointer_id());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = dial_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w
            .pan
            .borrow_mut()
            .sample(ev.pointer_id(), input::pointer_client_x(&ev));
        if let Some(delta_x) = delta {
            w.app.dispatch(DialEvent::PanMove { delta_x });
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerend(w: &InputWiring, event_name: &'static str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.pan.borrow_mut().end(ev.pointer_id()) {
            w.app.dispatch(DialEvent::PanEnd);
            log::debug!("[pointer] pan end ({})", event_name);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
