use crate::core::{DrawCommand, FrameClock, FrameInput, GalleryInstance, Soundwave, ValueNoise};
use crate::dom;
use crate::input;
use crate::render::CanvasRenderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SoundwaveView {
    pub canvas: web::HtmlCanvasElement,
    pub container: web::HtmlElement,
    pub renderer: CanvasRenderer,
    pub sketch: Soundwave,
    pub noise: ValueNoise,
    pub clock: FrameClock,
    /// Canvas size in CSS pixels.
    pub css_size: (f32, f32),
    commands: Vec<DrawCommand>,
}

impl SoundwaveView {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        container: web::HtmlElement,
        renderer: CanvasRenderer,
        sketch: Soundwave,
        noise: ValueNoise,
        css_size: (f32, f32),
    ) -> Self {
        Self {
            canvas,
            container,
            renderer,
            sketch,
            noise,
            clock: FrameClock::new(Instant::now()),
            css_size,
            commands: Vec::new(),
        }
    }

    pub fn frame(&mut self, mouse: &input::MouseState) {
        let frame = self.clock.tick(Instant::now());
        let pointer = mouse.client.map(|c| input::canvas_local(c, &self.canvas));
        let (width, height) = self.css_size;
        let frame_input = FrameInput {
            frame,
            pointer,
            width,
            height,
        };
        self.commands.clear();
        self.sketch.tick(&frame_input, &self.noise, &mut self.commands);
        self.renderer.render(&self.commands);
    }

    pub fn resize(&mut self, css_w: f64, css_h: f64) {
        dom::size_canvas(&self.canvas, css_w, css_h);
        self.renderer.set_dpr(dom::device_pixel_ratio());
        self.css_size = (css_w as f32, css_h as f32);
    }
}

pub struct GalleryView {
    pub canvas: web::HtmlCanvasElement,
    pub container: web::HtmlElement,
    pub renderer: CanvasRenderer,
    pub sketch: GalleryInstance,
    pub css_size: (f32, f32),
    commands: Vec<DrawCommand>,
}

impl GalleryView {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        container: web::HtmlElement,
        renderer: CanvasRenderer,
        sketch: GalleryInstance,
        css_size: (f32, f32),
    ) -> Self {
        Self {
            canvas,
            container,
            renderer,
            sketch,
            css_size,
            commands: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let (width, height) = self.css_size;
        self.commands.clear();
        self.sketch.tick(width, height, &mut self.commands);
        self.renderer.render(&self.commands);
    }

    pub fn resize(&mut self, css_w: f64, css_h: f64) {
        dom::size_canvas(&self.canvas, css_w, css_h);
        self.renderer.set_dpr(dom::device_pixel_ratio());
        self.css_size = (css_w as f32, css_h as f32);
    }
}

/// Every mounted sketch on the page, ticked from one animation frame callback.
pub struct FrameContext {
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub soundwave: Option<Rc<RefCell<SoundwaveView>>>,
    pub gallery: Vec<Rc<RefCell<GalleryView>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mouse = *self.mouse.borrow();
        if let Some(view) = &self.soundwave {
            view.borrow_mut().frame(&mouse);
        }
        for view in &self.gallery {
            view.borrow_mut().frame();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
