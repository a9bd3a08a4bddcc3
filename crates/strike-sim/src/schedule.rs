//! Deferred effects keyed on simulation time.
//!
//! At most one entry per `TimedEvent` is pending: scheduling an event that
//! is already pending replaces it, so a stale deadline can never fire.

use strike_core::enums::JamKind;

/// Slack for comparing accumulated float time against deadlines.
const DUE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEvent {
    /// Lift a jam.
    ClearJam(JamKind),
    /// Head home after the selected weapon ran dry.
    ExpenditureReturn,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    event: TimedEvent,
    due_secs: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `event` for `due_secs`, replacing any pending entry for it.
    pub fn schedule(&mut self, event: TimedEvent, due_secs: f64) {
        self.cancel(event);
        self.pending.push(Pending { event, due_secs });
    }

    /// Drop a pending event. Returns whether one was pending.
    pub fn cancel(&mut self, event: TimedEvent) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.event != event);
        self.pending.len() != before
    }

    pub fn due_at(&self, event: TimedEvent) -> Option<f64> {
        self.pending
            .iter()
            .find(|p| p.event == event)
            .map(|p| p.due_secs)
    }

    pub fn is_pending(&self, event: TimedEvent) -> bool {
        self.due_at(event).is_some()
    }

    /// Remove and return every event due at `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<TimedEvent> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_secs <= now + DUE_EPSILON {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs));
        due.into_iter().map(|p| p.event).collect()
    }
}
