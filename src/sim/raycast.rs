//! Ray marching and fisheye correction
//!
//! One ray per screen column, spread linearly across the field of view
//! centered on the player's heading. Rays march in fixed steps until a
//! solid tile or the maximum distance; the raw distance is then multiplied
//! by the cosine of the offset from the heading, which straightens the
//! curved-wall artifact of naive per-column distances.

use glam::Vec2;

use super::map::WorldMap;
use crate::consts::{FOV, MAX_RAY_DIST, RAY_STEP};
use crate::{heading_vec, normalize_angle};

/// One column's ray, discarded at frame end
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Screen column index
    pub column: usize,
    /// Absolute ray angle (radians)
    pub angle: f32,
    /// Raw marched distance to the wall hit (or MAX_RAY_DIST on no-hit)
    pub distance: f32,
    /// Fisheye-corrected distance used for projection
    pub corrected: f32,
}

/// March a single ray from `origin` at `angle`, viewer facing `heading`.
///
/// Returns (raw distance, corrected distance). Tile queries clamp into the
/// map, so a march that would leave a non-bordered map reads its edge cells.
pub fn cast_ray(map: &WorldMap, origin: Vec2, angle: f32, heading: f32) -> (f32, f32) {
    let dir = heading_vec(angle);
    let mut distance = 0.0;
    while distance < MAX_RAY_DIST {
        distance += RAY_STEP;
        if map.is_solid_at(origin + dir * distance) {
            break;
        }
    }
    let corrected = distance * normalize_angle(angle - heading).cos();
    (distance, corrected)
}

/// Cast `num_rays` columns across the field of view
pub fn cast_fov(map: &WorldMap, origin: Vec2, heading: f32, num_rays: usize) -> Vec<Ray> {
    (0..num_rays)
        .map(|column| {
            let angle = heading - FOV / 2.0 + (column as f32 / num_rays as f32) * FOV;
            let (distance, corrected) = cast_ray(map, origin, angle, heading);
            Ray {
                column,
                angle,
                distance,
                corrected,
            }
        })
        .collect()
}
