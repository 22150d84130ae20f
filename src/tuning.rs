//! Data-driven game balance
//!
//! Every gameplay threshold lives here rather than scattered through the
//! tick. A JSON file can override any subset of fields; everything else
//! keeps the shipped balance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player movement speed (world units per tick)
    pub move_speed: f32,
    /// Player turn rate (radians per tick)
    pub rot_speed: f32,
    /// Enemy pursuit speed (world units per tick)
    pub pursuit_speed: f32,
    /// Distance at which an enemy deals contact damage
    pub contact_radius: f32,
    /// Health drained per tick while in contact
    pub contact_damage: f32,
    /// Distance at which a pickup is consumed
    pub pickup_radius: f32,
    /// Health restored per pickup (capped at max health)
    pub heal_amount: f32,
    /// Maximum combat targeting distance
    pub attack_range: f32,
    /// Angular half-width of the attack cone (radians)
    pub aim_tolerance: f32,
    /// Split replacements scatter within ±this per axis
    pub split_jitter: f32,
    /// Ticks between pickup consumption and respawn
    pub respawn_delay_ticks: u64,
    /// Corner of the pickup respawn region (world units)
    pub respawn_min: Vec2,
    /// Extent of the pickup respawn region
    pub respawn_extent: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 2.2,
            rot_speed: 0.06,
            pursuit_speed: 1.2,
            contact_radius: 25.0,
            contact_damage: 0.3,
            pickup_radius: 30.0,
            heal_amount: 25.0,
            attack_range: 500.0,
            aim_tolerance: 0.2,
            split_jitter: 30.0,
            // 4 seconds at the nominal 60 Hz display cadence
            respawn_delay_ticks: 240,
            respawn_min: Vec2::new(100.0, 100.0),
            respawn_extent: Vec2::new(800.0, 400.0),
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_values() {
        let t = Tuning::default();
        assert_eq!(t.move_speed, 2.2);
        assert_eq!(t.pursuit_speed, 1.2);
        assert_eq!(t.contact_radius, 25.0);
        assert_eq!(t.contact_damage, 0.3);
        assert_eq!(t.heal_amount, 25.0);
        assert_eq!(t.attack_range, 500.0);
        assert_eq!(t.aim_tolerance, 0.2);
    }

    #[test]
    fn test_partial_override() {
        let t: Tuning = serde_json::from_str(r#"{"attack_range": 300.0}"#).unwrap();
        assert_eq!(t.attack_range, 300.0);
        assert_eq!(t.move_speed, 2.2);
    }
}
