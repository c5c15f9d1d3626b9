use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0)
}

/// Layout width/height of an element in CSS pixels.
#[inline]
pub fn element_size(el: &web::HtmlElement) -> (f64, f64) {
    (el.offset_width() as f64, el.offset_height() as f64)
}

pub fn find_container(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Create a canvas as the last child of `parent` and return it with its 2D context.
pub fn create_canvas(
    document: &web::Document,
    parent: &web::HtmlElement,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

/// Size a canvas to `css_w` x `css_h` CSS pixels with a devicePixelRatio backing store.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, css_w: f64, css_h: f64) {
    let dpr = device_pixel_ratio();
    let w_px = (css_w.max(0.0) * dpr).round() as u32;
    let h_px = (css_h.max(0.0) * dpr).round() as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{css_w}px"));
    _ = style.set_property("height", &format!("{css_h}px"));
    _ = style.set_property("display", "block");
}

/// Resolves once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
