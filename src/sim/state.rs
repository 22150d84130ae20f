//! Entity state and the simulation-owned store
//!
//! `WorldState` is the only mutable shared structure in the game. The tick
//! mutates it through store methods; the renderer borrows it read-only for
//! the duration of one frame. Entities carry ids so tests and events can
//! name them across mutations.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::events::{EventQueue, ScheduledAction};
use crate::consts::{ENEMY_SPAWN, MAX_HP, PICKUP_SPAWN, PLAYER_SPAWN};

/// Enemy behavior tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Walks straight at the player, ignoring walls
    Pursuer,
}

/// Pickup effect tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Health,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    /// Position in continuous world units
    pub pos: Vec2,
    /// Heading in radians, unbounded; normalized at comparison sites
    pub dir: f32,
    /// Health in [0, MAX_HP]; can dip below zero on the defeat tick
    pub hp: f32,
}

impl Player {
    fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            dir: 0.0,
            hp: MAX_HP,
        }
    }

    /// Terminal state: freezes all further physics/AI/combat
    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0.0
    }
}

/// A chasing enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EnemyKind,
}

/// A consumable pickup
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PickupKind,
}

/// Observable outcomes of one tick, for the driver/HUD and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Health first crossed zero this tick (fires exactly once per run)
    PlayerDefeated,
    /// An enemy was destroyed and replaced by two offspring
    EnemySplit { removed: u32, spawned: [u32; 2] },
    PickupConsumed { id: u32 },
    PickupRespawned { id: u32 },
}

/// Simulation-owned entity store
#[derive(Debug)]
pub struct WorldState {
    pub player: Player,
    enemies: Vec<Enemy>,
    pickups: Vec<Pickup>,
    events: EventQueue,
    /// Frames simulated so far; the clock for scheduled events
    pub tick_count: u64,
    rng: Pcg32,
    next_id: u32,
    defeat_signaled: bool,
}

impl WorldState {
    /// Fresh run with the starting roster; `seed` drives all randomness
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            player: Player::spawn(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            events: EventQueue::new(),
            tick_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            defeat_signaled: false,
        };
        state.spawn_enemy(Vec2::new(ENEMY_SPAWN.0, ENEMY_SPAWN.1), EnemyKind::Pursuer);
        state.spawn_pickup(Vec2::new(PICKUP_SPAWN.0, PICKUP_SPAWN.1), PickupKind::Health);
        state
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Read-only view for the renderer and the tick's scan loops
    #[inline]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[inline]
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn spawn_enemy(&mut self, pos: Vec2, kind: EnemyKind) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, pos, kind });
        id
    }

    pub fn spawn_pickup(&mut self, pos: Vec2, kind: PickupKind) -> u32 {
        let id = self.next_entity_id();
        self.pickups.push(Pickup { id, pos, kind });
        id
    }

    /// Step every enemy through `step(enemy) -> new position`
    pub fn move_enemies(&mut self, mut step: impl FnMut(&Enemy) -> Vec2) {
        for enemy in &mut self.enemies {
            enemy.pos = step(enemy);
        }
    }

    /// Destroy an enemy and spawn two replacements at its position, each
    /// scattered by an independent jitter in [-jitter, jitter) per axis.
    /// Returns the replacement ids, or None if the id is gone.
    pub fn split_enemy(&mut self, id: u32, jitter: f32) -> Option<[u32; 2]> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        let victim = self.enemies.remove(idx);
        let mut spawned = [0u32; 2];
        for slot in &mut spawned {
            let offset = if jitter > 0.0 {
                Vec2::new(
                    self.rng.random_range(-jitter..jitter),
                    self.rng.random_range(-jitter..jitter),
                )
            } else {
                Vec2::ZERO
            };
            *slot = self.spawn_enemy(victim.pos + offset, victim.kind);
        }
        Some(spawned)
    }

    /// Remove a pickup by id; true if it was present
    pub fn remove_pickup(&mut self, id: u32) -> bool {
        let before = self.pickups.len();
        self.pickups.retain(|p| p.id != id);
        self.pickups.len() != before
    }

    /// Queue a respawn `delay_ticks` ticks from now
    pub fn schedule_pickup_respawn(&mut self, kind: PickupKind, delay_ticks: u64) {
        self.events
            .schedule(self.tick_count + delay_ticks, ScheduledAction::RespawnPickup(kind));
    }

    /// Pop every deferred action due this tick
    pub fn drain_due_events(&mut self) -> Vec<ScheduledAction> {
        self.events.drain_due(self.tick_count)
    }

    pub fn pending_events(&self) -> usize {
        self.events.pending()
    }

    /// Uniform position inside the respawn region
    pub fn random_respawn_pos(&mut self, min: Vec2, extent: Vec2) -> Vec2 {
        let t = Vec2::new(
            self.rng.random_range(0.0..1.0),
            self.rng.random_range(0.0..1.0),
        );
        min + t * extent
    }

    /// Latch the defeat signal; true only on the first call
    pub fn signal_defeat(&mut self) -> bool {
        if self.defeat_signaled {
            false
        } else {
            self.defeat_signaled = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_roster() {
        let state = WorldState::new(7);
        assert_eq!(state.enemies().len(), 1);
        assert_eq!(state.pickups().len(), 1);
        assert_eq!(state.player.hp, MAX_HP);
        assert_eq!(state.player.pos, Vec2::new(96.0, 96.0));
        assert_eq!(state.enemies()[0].pos, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_split_replaces_one_with_two_nearby() {
        let mut state = WorldState::new(7);
        let target = state.enemies()[0].id;
        let origin = state.enemies()[0].pos;

        let spawned = state.split_enemy(target, 30.0).unwrap();
        assert_eq!(state.enemies().len(), 2);
        assert!(state.enemies().iter().all(|e| e.id != target));
        for id in spawned {
            let e = state.enemies().iter().find(|e| e.id == id).unwrap();
            assert!((e.pos.x - origin.x).abs() < 30.0);
            assert!((e.pos.y - origin.y).abs() < 30.0);
        }
    }

    #[test]
    fn test_split_unknown_id_is_noop() {
        let mut state = WorldState::new(7);
        assert!(state.split_enemy(9999, 30.0).is_none());
        assert_eq!(state.enemies().len(), 1);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = WorldState::new(42);
        let mut b = WorldState::new(42);
        let pa = a.random_respawn_pos(Vec2::new(100.0, 100.0), Vec2::new(800.0, 400.0));
        let pb = b.random_respawn_pos(Vec2::new(100.0, 100.0), Vec2::new(800.0, 400.0));
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_respawn_pos_within_region() {
        let mut state = WorldState::new(3);
        for _ in 0..50 {
            let p = state.random_respawn_pos(Vec2::new(100.0, 100.0), Vec2::new(800.0, 400.0));
            assert!(p.x >= 100.0 && p.x < 900.0);
            assert!(p.y >= 100.0 && p.y < 500.0);
        }
    }

    #[test]
    fn test_defeat_signal_latches() {
        let mut state = WorldState::new(7);
        assert!(state.signal_defeat());
        assert!(!state.signal_defeat());
    }
}
