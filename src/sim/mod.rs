//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step
//! - Seeded RNG only, owned by the entity store
//! - Single-writer discipline: all entity mutation goes through `WorldState`
//! - No rendering or platform dependencies

pub mod events;
pub mod map;
pub mod raycast;
pub mod state;
pub mod tick;

pub use events::{EventQueue, ScheduledAction};
pub use map::WorldMap;
pub use raycast::{Ray, cast_fov, cast_ray};
pub use state::{Enemy, EnemyKind, GameEvent, Pickup, PickupKind, Player, WorldState};
pub use tick::tick;
