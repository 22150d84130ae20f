//! Scene painting against an abstract drawing surface
//!
//! The core owns the projection math and emits rectangle/line/text
//! commands; the host owns pixels. Coordinates are top-left origin,
//! Y-down, matching the world-to-screen projection.

pub mod hud;
pub mod scene;
pub mod sprites;
pub mod surface;

pub use hud::{HudSink, push_readouts};
pub use scene::render_frame;
pub use surface::{Color, DrawSurface, TextAlign};
