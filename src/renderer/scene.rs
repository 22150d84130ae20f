//! Background bands and perspective wall columns
//!
//! Walls project as vertical slabs whose height is inversely proportional
//! to the fisheye-corrected distance, shaded darker with range. Sprites are
//! painted on top by the billboard pass.

use super::sprites;
use super::surface::{Color, DrawSurface};
use crate::consts::TILE_SIZE;
use crate::settings::Settings;
use crate::sim::map::WorldMap;
use crate::sim::raycast::{Ray, cast_fov};
use crate::sim::state::WorldState;

const SKY: Color = Color::rgb(5, 5, 5);
const FLOOR: Color = Color::rgb(17, 17, 17);

/// Brightness of the wall green channel decays with distance and is
/// clamped so near walls do not over-brighten and far walls bottom out.
const WALL_SHADE_MAX: f32 = 180.0;
const WALL_SHADE_BASE: f32 = 200.0;

/// Paint one complete frame: bands, walls, then sprites
pub fn render_frame(
    surface: &mut dyn DrawSurface,
    map: &WorldMap,
    state: &WorldState,
    settings: &Settings,
) {
    let width = settings.view_width as f32;
    let height = settings.view_height as f32;

    draw_background(surface, width, height);

    let rays = cast_fov(map, state.player.pos, state.player.dir, settings.num_rays);
    draw_walls(surface, &rays, width, height);

    sprites::draw_sprites(surface, state, width, height);
}

fn draw_background(surface: &mut dyn DrawSurface, width: f32, height: f32) {
    surface.fill_rect(0.0, 0.0, width, height / 2.0, SKY);
    surface.fill_rect(0.0, height / 2.0, width, height / 2.0, FLOOR);
}

pub(crate) fn wall_shade(corrected: f32) -> u8 {
    (WALL_SHADE_BASE - corrected / 4.0).clamp(0.0, WALL_SHADE_MAX) as u8
}

fn draw_walls(surface: &mut dyn DrawSurface, rays: &[Ray], width: f32, height: f32) {
    let column_step = width / rays.len() as f32;
    for ray in rays {
        let slab_height = TILE_SIZE * height / ray.corrected;
        let color = Color::rgb(0, wall_shade(ray.corrected), 50);
        surface.fill_rect(
            ray.column as f32 * column_step,
            (height - slab_height) / 2.0,
            // One pixel of overlap so adjacent columns leave no seams
            column_step + 1.0,
            slab_height,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::RecordingSurface;

    #[test]
    fn test_shade_clamps_both_ends() {
        // Point blank: 200 - ~0 would exceed the max
        assert_eq!(wall_shade(2.0), 180);
        // Mid range decays linearly
        assert_eq!(wall_shade(400.0), 100);
        // Beyond 800 units the raw formula goes negative
        assert_eq!(wall_shade(900.0), 0);
    }

    #[test]
    fn test_background_fills_both_halves() {
        let mut surface = RecordingSurface::default();
        draw_background(&mut surface, 960.0, 540.0);
        let rects = surface.rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (0.0, 0.0, 960.0, 270.0, SKY));
        assert_eq!(rects[1], (0.0, 270.0, 960.0, 270.0, FLOOR));
    }

    #[test]
    fn test_wall_slab_height_inverse_to_distance() {
        let rays = vec![
            Ray {
                column: 0,
                angle: 0.0,
                distance: 128.0,
                corrected: 128.0,
            },
            Ray {
                column: 1,
                angle: 0.0,
                distance: 256.0,
                corrected: 256.0,
            },
        ];
        let mut surface = RecordingSurface::default();
        draw_walls(&mut surface, &rays, 960.0, 540.0);
        let rects = surface.rects();

        // height = 64 * 540 / corrected
        assert_eq!(rects[0].3, 270.0);
        assert_eq!(rects[1].3, 135.0);
        // Nearer slab is taller and both are vertically centered
        assert_eq!(rects[0].1, (540.0 - 270.0) / 2.0);
        assert_eq!(rects[1].1, (540.0 - 135.0) / 2.0);
        // Column placement and seam overlap
        assert_eq!(rects[1].0, 480.0);
        assert_eq!(rects[0].2, 481.0);
    }

    #[test]
    fn test_full_frame_emits_walls_for_every_column() {
        let map = WorldMap::built_in();
        let state = WorldState::new(1);
        let settings = Settings::default();
        let mut surface = RecordingSurface::default();

        render_frame(&mut surface, &map, &state, &settings);
        // 2 background bands + one slab per ray, then sprites
        assert!(surface.rects().len() >= 2 + settings.num_rays);
    }
}
