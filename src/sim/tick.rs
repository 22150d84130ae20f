//! Per-frame simulation step
//!
//! Advances the world exactly one frame: deferred respawns, player
//! movement with axis-separated wall collision, forward-cone combat,
//! enemy pursuit with contact damage, and pickup consumption. Returns the
//! observable events of the tick for the driver and HUD.

use glam::Vec2;

use super::events::ScheduledAction;
use super::map::WorldMap;
use super::state::{GameEvent, WorldState};
use crate::consts::MAX_HP;
use crate::input::InputSnapshot;
use crate::tuning::Tuning;
use crate::{bearing_to, heading_vec};

/// Advance the game state by one frame
pub fn tick(
    state: &mut WorldState,
    map: &WorldMap,
    input: &InputSnapshot,
    tuning: &Tuning,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.tick_count += 1;

    // Deferred respawns fire even after defeat; a pending respawn is never
    // cancelled by the terminal state.
    for action in state.drain_due_events() {
        match action {
            ScheduledAction::RespawnPickup(kind) => {
                let pos = state.random_respawn_pos(tuning.respawn_min, tuning.respawn_extent);
                let id = state.spawn_pickup(pos, kind);
                log::debug!("pickup {id} respawned at ({:.0}, {:.0})", pos.x, pos.y);
                events.push(GameEvent::PickupRespawned { id });
            }
        }
    }

    // Terminal state halts all physics/AI/combat
    if state.player.is_defeated() {
        return events;
    }

    move_player(state, map, input, tuning);

    if input.attack {
        resolve_attack(state, tuning, &mut events);
    }

    pursue_and_damage(state, tuning, &mut events);
    consume_pickups(state, tuning, &mut events);

    events
}

/// Displacement along the heading, then axis-separated collision: each axis
/// applies only if its candidate tile is open, which lets the player slide
/// along walls.
fn move_player(state: &mut WorldState, map: &WorldMap, input: &InputSnapshot, tuning: &Tuning) {
    let mut delta = Vec2::ZERO;
    if input.move_forward {
        delta += heading_vec(state.player.dir) * tuning.move_speed;
    }
    if input.move_backward {
        delta -= heading_vec(state.player.dir) * tuning.move_speed;
    }
    if input.turn_left {
        state.player.dir -= tuning.rot_speed;
    }
    if input.turn_right {
        state.player.dir += tuning.rot_speed;
    }

    let pos = state.player.pos;
    if !map.is_solid_at(Vec2::new(pos.x + delta.x, pos.y)) {
        state.player.pos.x += delta.x;
    }
    // The Y probe reads the column the X step just settled on
    if !map.is_solid_at(Vec2::new(state.player.pos.x, pos.y + delta.y)) {
        state.player.pos.y += delta.y;
    }
}

/// Forward-cone attack: the most recently added enemy within the aim cone
/// and range is destroyed and splits into two. One target per attack.
fn resolve_attack(state: &mut WorldState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player = &state.player;
    let target = state.enemies().iter().rev().find(|enemy| {
        let bearing = bearing_to(player.pos, player.dir, enemy.pos);
        let dist = (enemy.pos - player.pos).length();
        bearing.abs() < tuning.aim_tolerance && dist < tuning.attack_range
    });

    if let Some(id) = target.map(|e| e.id)
        && let Some(spawned) = state.split_enemy(id, tuning.split_jitter)
    {
        log::debug!("enemy {id} destroyed, split into {spawned:?}");
        events.push(GameEvent::EnemySplit {
            removed: id,
            spawned,
        });
    }
}

/// Every enemy steps straight toward the player (walls are no obstacle to
/// pursuers); contact before the step drains health. The first crossing of
/// zero latches the defeat signal.
fn pursue_and_damage(state: &mut WorldState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player_pos = state.player.pos;
    let speed = tuning.pursuit_speed;
    let contact_radius = tuning.contact_radius;

    let mut contacts = 0u32;
    state.move_enemies(|enemy| {
        let delta = player_pos - enemy.pos;
        let dist = delta.length();
        if dist < contact_radius {
            contacts += 1;
        }
        if dist > 0.0 {
            // Zero distance skips normalization: already at the target
            enemy.pos + delta / dist * speed
        } else {
            enemy.pos
        }
    });

    if contacts > 0 {
        state.player.hp -= tuning.contact_damage * contacts as f32;
        if state.player.is_defeated() && state.signal_defeat() {
            log::info!("player defeated on tick {}", state.tick_count);
            events.push(GameEvent::PlayerDefeated);
        }
    }
}

/// Pickups within reach heal (capped), vanish immediately, and queue a
/// delayed same-kind respawn at a fresh random position.
fn consume_pickups(state: &mut WorldState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player_pos = state.player.pos;
    let consumed: Vec<_> = state
        .pickups()
        .iter()
        .filter(|p| (player_pos - p.pos).length() < tuning.pickup_radius)
        .map(|p| (p.id, p.kind))
        .collect();

    for (id, kind) in consumed {
        if state.remove_pickup(id) {
            state.player.hp = (state.player.hp + tuning.heal_amount).min(MAX_HP);
            state.schedule_pickup_respawn(kind, tuning.respawn_delay_ticks);
            log::debug!("pickup {id} consumed, hp now {:.1}", state.player.hp);
            events.push(GameEvent::PickupConsumed { id });
        }
    }
}
