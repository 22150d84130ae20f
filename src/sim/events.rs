//! Scheduled-event queue
//!
//! Deferred actions (currently only pickup respawns) are queued against a
//! due tick and drained once per simulation step, keeping all entity
//! mutation on the single writer. An event fires at most once, at the first
//! tick >= its due tick. There is no cancellation.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::PickupKind;

/// A deferred mutation of the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Re-create a consumed pickup at a fresh random position
    RespawnPickup(PickupKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    due_tick: u64,
    /// Insertion sequence, so same-tick events fire in schedule order
    seq: u64,
    action: ScheduledAction,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert for earliest-due-first
        other
            .due_tick
            .cmp(&self.due_tick)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, action: ScheduledAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled {
            due_tick,
            seq,
            action,
        });
    }

    /// Pop every event due at or before `now`, in due order
    pub fn drain_due(&mut self, now: u64) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|head| head.due_tick <= now) {
            if let Some(scheduled) = self.heap.pop() {
                due.push(scheduled.action);
            }
        }
        due
    }

    pub fn pending(&self) -> usize {
        self.heap.len()
    }
}
