//! Per-tick collection of events and alerts.

use strike_core::enums::AlertLevel;
use strike_core::error::CommandRejection;
use strike_core::events::{Alert, SimEvent};

/// Events and alerts gathered since the last snapshot.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    alerts: Vec<Alert>,
    tick: u64,
}

impl EventLog {
    /// Stamp subsequent alerts with `tick`.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn alert(&mut self, level: AlertLevel, message: impl Into<String>) {
        self.alerts.push(Alert {
            level,
            message: message.into(),
            tick: self.tick,
        });
    }

    /// Record a refused command. State is left as it was by the caller.
    pub fn reject(&mut self, command: &'static str, rejection: &CommandRejection) {
        tracing::warn!(command, %rejection, "command rejected");
        let reason = rejection.to_string();
        self.alert(AlertLevel::Warning, format!("{command}: {reason}"));
        self.emit(SimEvent::CommandRejected {
            command: command.to_string(),
            reason,
        });
    }

    /// Hand over everything collected so far.
    pub fn drain(&mut self) -> (Vec<SimEvent>, Vec<Alert>) {
        (
            std::mem::take(&mut self.events),
            std::mem::take(&mut self.alerts),
        )
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.alerts.clear();
    }
}
