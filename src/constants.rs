// Page wiring constants used by the web frontend.

// Soundwave host element and canvas height (CSS px); width follows the container
pub const SOUNDWAVE_CONTAINER_ID: &str = "canvas-container";
pub const SOUNDWAVE_HEIGHT_CSS: f64 = 500.0;

// Gallery host elements, one sketch per slot (slot id = position + 1)
pub const GALLERY_CONTAINER_IDS: [&str; 4] = [
    "project-canvas-1",
    "project-canvas-2",
    "project-canvas-3",
    "project-canvas-4",
];
pub const GALLERY_VARIANT_ATTR: &str = "data-variant";

// Canvas defaults
pub const LINE_CAP: &str = "round";
