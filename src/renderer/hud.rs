//! HUD readouts
//!
//! The host owns the actual text widgets; the core pushes the current
//! values once per frame and fires the defeat overlay toggle exactly once
//! per run.

use crate::sim::state::WorldState;

/// Named display fields owned by the host
pub trait HudSink {
    /// Current health, rounded up
    fn set_health(&mut self, hp: u32);
    /// Current enemy population
    fn set_enemy_count(&mut self, count: usize);
    /// One-shot defeat overlay; called at most once per run
    fn show_defeat_overlay(&mut self);
}

/// Push the per-frame readouts
pub fn push_readouts(hud: &mut dyn HudSink, state: &WorldState) {
    hud.set_health(state.player.hp.max(0.0).ceil() as u32);
    hud.set_enemy_count(state.enemies().len());
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every HUD call for assertions
    #[derive(Debug, Default)]
    pub struct RecordingHud {
        pub health: Vec<u32>,
        pub counts: Vec<usize>,
        pub defeat_overlays: usize,
    }

    impl HudSink for RecordingHud {
        fn set_health(&mut self, hp: u32) {
            self.health.push(hp);
        }

        fn set_enemy_count(&mut self, count: usize) {
            self.counts.push(count);
        }

        fn show_defeat_overlay(&mut self) {
            self.defeat_overlays += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingHud;
    use super::*;

    #[test]
    fn test_health_is_rounded_up() {
        let mut state = WorldState::new(1);
        state.player.hp = 99.1;
        let mut hud = RecordingHud::default();
        push_readouts(&mut hud, &state);
        assert_eq!(hud.health, vec![100]);
    }

    #[test]
    fn test_negative_health_reads_zero() {
        let mut state = WorldState::new(1);
        state.player.hp = -0.2;
        let mut hud = RecordingHud::default();
        push_readouts(&mut hud, &state);
        assert_eq!(hud.health, vec![0]);
    }

    #[test]
    fn test_enemy_count_tracks_store() {
        let state = WorldState::new(1);
        let mut hud = RecordingHud::default();
        push_readouts(&mut hud, &state);
        assert_eq!(hud.counts, vec![1]);
    }
}
