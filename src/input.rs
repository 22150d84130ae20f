//! Input snapshot consumed by the simulation
//!
//! The host refreshes key/pointer state at arbitrary times; the simulation
//! reads one consistent snapshot per tick. Actions are level-based ("is the
//! key down right now"); one-shot edge detection is the host's concern.

/// Named logical actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Attack,
}

/// Current active-state of every logical action
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub move_forward: bool,
    pub move_backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub attack: bool,
}

impl InputSnapshot {
    pub fn is_active(&self, action: Action) -> bool {
        match action {
            Action::MoveForward => self.move_forward,
            Action::MoveBackward => self.move_backward,
            Action::TurnLeft => self.turn_left,
            Action::TurnRight => self.turn_right,
            Action::Attack => self.attack,
        }
    }

    /// Set one action's state (builder-style, for hosts and tests)
    pub fn with(mut self, action: Action, active: bool) -> Self {
        match action {
            Action::MoveForward => self.move_forward = active,
            Action::MoveBackward => self.move_backward = active,
            Action::TurnLeft => self.turn_left = active,
            Action::TurnRight => self.turn_right = active,
            Action::Attack => self.attack = active,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_idle() {
        let snap = InputSnapshot::default();
        for action in [
            Action::MoveForward,
            Action::MoveBackward,
            Action::TurnLeft,
            Action::TurnRight,
            Action::Attack,
        ] {
            assert!(!snap.is_active(action));
        }
    }

    #[test]
    fn test_with_sets_single_action() {
        let snap = InputSnapshot::default().with(Action::Attack, true);
        assert!(snap.is_active(Action::Attack));
        assert!(!snap.is_active(Action::MoveForward));
    }
}
