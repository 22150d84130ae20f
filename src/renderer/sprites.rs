//! Billboard sprite pass
//!
//! Enemies and pickups are merged, depth-sorted farthest-first, and drawn
//! as camera-facing billboards. Overdraw handles occlusion: a nearer sprite
//! simply paints over a farther one, so no depth buffer is needed. Screen X
//! comes from a linear mapping of the normalized bearing across the frame;
//! on-screen size is inversely proportional to the true (uncorrected)
//! distance.

use glam::Vec2;

use super::surface::{Color, DrawSurface, TextAlign};
use crate::bearing_to;
use crate::consts::{FOV, TILE_SIZE};
use crate::sim::state::{EnemyKind, PickupKind, WorldState};

const SHEET_BODY: Color = Color::rgb(255, 255, 255);
const SHEET_INK: Color = Color::rgb(0, 0, 0);
const SHEET_FIELD: Color = Color::rgb(218, 232, 252);
const SHEET_RULE: Color = Color::rgb(85, 85, 85);
const BAG_BODY: Color = Color::rgb(255, 69, 0);
const BAG_FOIL: Color = Color::rgb(210, 43, 43);
const BAG_LABEL: Color = Color::rgb(255, 255, 0);

#[derive(Debug, Clone, Copy)]
enum SpriteKind {
    Enemy(EnemyKind),
    Pickup(PickupKind),
}

/// Draw every visible sprite over the wall pass
pub(crate) fn draw_sprites(
    surface: &mut dyn DrawSurface,
    state: &WorldState,
    width: f32,
    height: f32,
) {
    let player = &state.player;

    let mut sprites: Vec<(f32, Vec2, SpriteKind)> = state
        .enemies()
        .iter()
        .map(|e| ((e.pos - player.pos).length(), e.pos, SpriteKind::Enemy(e.kind)))
        .chain(
            state
                .pickups()
                .iter()
                .map(|p| ((p.pos - player.pos).length(), p.pos, SpriteKind::Pickup(p.kind))),
        )
        .collect();

    // Farthest first so nearer sprites occlude by overdraw
    sprites.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    for (dist, pos, kind) in sprites {
        // A sprite at the eye has no defined projection
        if dist <= 0.0 {
            continue;
        }
        let bearing = bearing_to(player.pos, player.dir, pos);
        // Wide cull margin (full FOV) so billboards straddling the frame
        // edge still draw
        if bearing.abs() >= FOV {
            continue;
        }

        let screen_x = (0.5 * (bearing / (FOV / 2.0)) + 0.5) * width;
        let size = TILE_SIZE * height / dist;

        match kind {
            SpriteKind::Enemy(EnemyKind::Pursuer) => {
                draw_pursuer(surface, screen_x, height, size)
            }
            SpriteKind::Pickup(PickupKind::Health) => {
                draw_health_pack(surface, screen_x, height, size)
            }
        }
    }
}

/// Pursuer billboard: a pale document sheet with a header, highlighted
/// field bands, and ruled body lines
fn draw_pursuer(surface: &mut dyn DrawSurface, screen_x: f32, height: f32, size: f32) {
    let sheet_w = size * 0.6;
    let sheet_h = size * 0.8;
    let top = height / 2.0 - sheet_h / 2.0;
    let left = screen_x - sheet_w / 2.0;

    surface.fill_rect(left, top, sheet_w, sheet_h, SHEET_BODY);
    surface.draw_text(
        "NOTICE",
        screen_x,
        top + size / 12.0,
        size / 18.0,
        TextAlign::Center,
        SHEET_INK,
    );

    for band_y in [size / 6.0, size / 2.3, size / 1.4] {
        surface.fill_rect(left + 2.0, top + band_y, sheet_w - 4.0, size / 25.0, SHEET_FIELD);
    }

    for i in 0..10 {
        let line_y = top + size / 4.0 + i as f32 * size / 18.0;
        // Leave gaps where the field bands sit
        if line_y > top + size / 2.4 && line_y < top + size / 2.1 {
            continue;
        }
        if line_y > top + size / 1.45 && line_y < top + size / 1.3 {
            continue;
        }
        surface.draw_line(left + 5.0, line_y, left + sheet_w - 5.0, line_y, SHEET_RULE);
    }
}

/// Health pickup billboard: a snack bag with crimped foil ends
fn draw_health_pack(surface: &mut dyn DrawSurface, screen_x: f32, height: f32, size: f32) {
    let bag_w = size / 3.0;
    let bag_h = size / 2.2;
    let bag_y = height / 2.0 + size / 10.0;
    let left = screen_x - bag_w / 2.0;

    surface.fill_rect(left, bag_y, bag_w, bag_h, BAG_BODY);
    surface.fill_rect(left - 2.0, bag_y, bag_w + 4.0, bag_h / 6.0, BAG_FOIL);
    surface.fill_rect(
        left - 2.0,
        bag_y + bag_h - bag_h / 8.0,
        bag_w + 4.0,
        bag_h / 8.0,
        BAG_FOIL,
    );
    surface.draw_text(
        "RATIONS",
        screen_x - bag_w / 3.0,
        bag_y + bag_h / 1.8,
        size / 15.0,
        TextAlign::Left,
        BAG_LABEL,
    );
}
