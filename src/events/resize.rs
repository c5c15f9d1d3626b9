use crate::constants::SOUNDWAVE_HEIGHT_CSS;
use crate::dom;
use crate::frame::{GalleryView, SoundwaveView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-fit resize-adaptive canvases to their containers on window resize.
/// Artwork gallery canvases keep their fixed size.
pub fn wire_resize(
    soundwave: Option<Rc<RefCell<SoundwaveView>>>,
    gallery: Vec<Rc<RefCell<GalleryView>>>,
) {
    let adaptive: Vec<_> = gallery
        .into_iter()
        .filter(|g| g.borrow().sketch.variant.is_resize_adaptive())
        .collect();
    if soundwave.is_none() && adaptive.is_empty() {
        return;
    }
    let closure = Closure::wrap(Box::new(move || {
        if let Some(view) = &soundwave {
            let mut v = view.borrow_mut();
            let (w, _) = dom::element_size(&v.container);
            v.resize(w, SOUNDWAVE_HEIGHT_CSS);
        }
        for view in &adaptive {
            let mut v = view.borrow_mut();
            let (cw, ch) = dom::element_size(&v.container);
            let (w, h) = v.sketch.canvas_size((cw as f32, ch as f32));
            v.resize(w as f64, h as f64);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
