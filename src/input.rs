use glam::Vec2;
use web_sys as web;

/// Last pointer position in viewport (client) coordinates.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    /// `None` until the first pointer event.
    pub client: Option<Vec2>,
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Convert a client position to canvas-local CSS pixels. Re-read each frame
/// so scrolling under a still pointer is picked up.
#[inline]
pub fn canvas_local(client: Vec2, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(client.x - rect.left() as f32, client.y - rect.top() as f32)
}
