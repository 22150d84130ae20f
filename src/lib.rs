//! Corridor Crawl - a first-person raycasting survival core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (map, entity store, raycasting, tick)
//! - `renderer`: Abstract-surface scene painting (walls, billboards, HUD)
//! - `driver`: Frame loop with injectable clock
//! - `tuning`: Data-driven game balance
//!
//! The presentation surface, input capture, and HUD widgets are host
//! concerns: the crate consumes a [`renderer::DrawSurface`], an
//! [`input::InputSnapshot`], and a [`renderer::HudSink`].

pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World units per map cell
    pub const TILE_SIZE: f32 = 64.0;
    /// Horizontal field of view (radians)
    pub const FOV: f32 = std::f32::consts::PI / 3.0;
    /// Ray march step length (world units)
    pub const RAY_STEP: f32 = 2.0;
    /// Maximum ray march distance; a no-hit at this range renders as a
    /// very far wall. Must stay within the bordered map extents.
    pub const MAX_RAY_DIST: f32 = 1000.0;
    /// Player health ceiling
    pub const MAX_HP: f32 = 100.0;
    /// Player spawn position (world units)
    pub const PLAYER_SPAWN: (f32, f32) = (96.0, 96.0);
    /// Initial enemy position
    pub const ENEMY_SPAWN: (f32, f32) = (400.0, 200.0);
    /// Initial pickup position
    pub const PICKUP_SPAWN: (f32, f32) = (200.0, 300.0);
}

/// Normalize an angle into (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Bearing of `target` as seen from `origin` facing `heading`, in (-π, π]
#[inline]
pub fn bearing_to(origin: Vec2, heading: f32, target: Vec2) -> f32 {
    let delta = target - origin;
    normalize_angle(delta.y.atan2(delta.x) - heading)
}
