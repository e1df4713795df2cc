// Shared tuning constants for the parallax page.

// Layer speeds (fraction of the page scroll offset)
pub const SKYLINE_SPEED: f64 = 0.3; // slowest, reads as farthest away
pub const BUILDINGS_SPEED: f64 = 1.0; // moves with the page
pub const VEHICLES_SPEED: f64 = 0.5;
pub const AIRPLANE_SPEED: f64 = 0.5;

// Stacking hints (CSS z-index)
pub const SKYLINE_Z: i32 = 0;
pub const BUILDINGS_Z: i32 = 10;
pub const AIRPLANE_Z: i32 = 15;
pub const VEHICLES_Z: i32 = 20;
pub const SECTIONS_Z: i32 = 30; // marketing sections sit above every layer

// Scroll container
pub const CONTAINER_HEIGHT_VH: u32 = 250;

// Transform transition
pub const TRANSITION_PROPERTY: &str = "transform";
pub const TRANSITION_DURATION_MS: u32 = 100;
pub const TRANSITION_EASING: &str = "ease-out";

// Listener registration
pub const SCROLL_EVENT: &str = "scroll";
pub const PASSIVE_LISTENER: bool = true;

// Document metadata
pub const PAGE_TITLE: &str = "Parallax Carousel Demo";
pub const PAGE_DESCRIPTION: &str =
    "Vertical scroll parallax carousel demonstration with layered movement";
pub const PAGE_LANG: &str = "en";

// DOM hooks shared by the pre-rendered shell and the wasm front-end
pub const ROOT_ELEMENT_ID: &str = "app";
pub const LAYER_ATTR: &str = "data-layer";
pub const LAYER_CLASS: &str = "parallax-layer";
