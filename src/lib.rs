#![cfg(target_arch = "wasm32")]
use crate::constants::{
    GALLERY_CONTAINER_IDS, GALLERY_VARIANT_ATTR, SOUNDWAVE_CONTAINER_ID, SOUNDWAVE_HEIGHT_CSS,
};
use crate::core::{
    GalleryConfig, GalleryInstance, GalleryVariant, Soundwave, SoundwaveConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundwave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let soundwave = match mount_soundwave(&document) {
        Ok(view) => view,
        Err(e) => {
            log::error!("[soundwave] mount failed: {:?}", e);
            None
        }
    };

    let gallery_cfg = GalleryConfig::default();
    let mut gallery = Vec::new();
    for (slot, id) in GALLERY_CONTAINER_IDS.iter().enumerate() {
        match mount_gallery(&document, id, slot as u32 + 1, &gallery_cfg) {
            Ok(Some(view)) => gallery.push(view),
            Ok(None) => {}
            Err(e) => log::error!("[gallery] #{} mount failed: {:?}", id, e),
        }
    }

    if soundwave.is_none() && gallery.is_empty() {
        log::warn!("no sketch containers found; nothing to animate");
        return Ok(());
    }

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(events::InputWiring {
        mouse_state: mouse_state.clone(),
        soundwave: soundwave.clone(),
    });
    events::wire_resize(soundwave.clone(), gallery.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        mouse: mouse_state,
        soundwave,
        gallery,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn mount_soundwave(
    document: &web::Document,
) -> anyhow::Result<Option<Rc<RefCell<frame::SoundwaveView>>>> {
    let Some(container) = dom::find_container(document, SOUNDWAVE_CONTAINER_ID) else {
        log::warn!("[soundwave] missing #{}", SOUNDWAVE_CONTAINER_ID);
        return Ok(None);
    };
    let (css_w, _) = dom::element_size(&container);
    let (canvas, ctx) = dom::create_canvas(document, &container)?;
    dom::size_canvas(&canvas, css_w, SOUNDWAVE_HEIGHT_CSS);

    let seed = rand::random::<u64>();
    let cfg = SoundwaveConfig::default();
    let noise = cfg.noise(seed);
    let view = frame::SoundwaveView::new(
        canvas,
        container,
        render::CanvasRenderer::new(ctx, dom::device_pixel_ratio()),
        Soundwave::new(cfg),
        noise,
        (css_w as f32, SOUNDWAVE_HEIGHT_CSS as f32),
    );
    log::info!(
        "[soundwave] mounted {}x{} bars={} seed={:#x}",
        css_w,
        SOUNDWAVE_HEIGHT_CSS,
        view.sketch.cfg.bar_count,
        seed
    );
    Ok(Some(Rc::new(RefCell::new(view))))
}

fn mount_gallery(
    document: &web::Document,
    container_id: &str,
    slot: u32,
    cfg: &GalleryConfig,
) -> anyhow::Result<Option<Rc<RefCell<frame::GalleryView>>>> {
    let Some(container) = dom::find_container(document, container_id) else {
        return Ok(None);
    };
    let variant =
        GalleryVariant::from_attr(container.get_attribute(GALLERY_VARIANT_ATTR).as_deref());
    let sketch = GalleryInstance::new(slot, container_id, variant, cfg.clone());
    let (container_w, container_h) = dom::element_size(&container);
    let (w, h) = sketch.canvas_size((container_w as f32, container_h as f32));

    let (canvas, ctx) = dom::create_canvas(document, &container)?;
    dom::size_canvas(&canvas, w as f64, h as f64);
    log::info!(
        "[gallery] mounted #{} slot={} {:?} {}x{}",
        sketch.container_id,
        sketch.id,
        sketch.variant,
        w,
        h
    );
    let view = frame::GalleryView::new(
        canvas,
        container,
        render::CanvasRenderer::new(ctx, dom::device_pixel_ratio()),
        sketch,
        (w, h),
    );
    Ok(Some(Rc::new(RefCell::new(view))))
}
