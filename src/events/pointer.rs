use crate::frame::SoundwaveView;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub soundwave: Option<Rc<RefCell<SoundwaveView>>>,
}

/// Pointer listeners live on the window so the position keeps updating (and
/// hover turns off) when the pointer leaves the canvas.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().client = Some(input::pointer_client(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().client = Some(input::pointer_client(&ev));
        if let Some(view) = &w.soundwave {
            // hover flag is from the last drawn frame
            if view.borrow_mut().sketch.click() {
                log::debug!("[click] impulse kicked");
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
