//! Transient celebration effects shown after a successful export.

use std::time::{Duration, Instant};

/// A timed visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Confetti,
    Toast,
    Glow,
    EmojiBurst,
}

impl Effect {
    pub const ALL: [Effect; 4] = [
        Effect::Confetti,
        Effect::Toast,
        Effect::Glow,
        Effect::EmojiBurst,
    ];

    /// How long the effect stays visible.
    pub fn duration(&self) -> Duration {
        match self {
            Effect::Confetti => Duration::from_millis(3000),
            Effect::Toast => Duration::from_millis(3200),
            Effect::Glow => Duration::from_millis(2000),
            Effect::EmojiBurst => Duration::from_millis(1500),
        }
    }
}

/// Export feedback timers. All effects start together on success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportFeedback {
    started_at: Option<Instant>,
}

impl ExportFeedback {
    /// Start every effect at `now`. Re-triggering restarts the timers.
    pub fn trigger(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn is_active(&self, effect: Effect, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) < effect.duration(),
            None => false,
        }
    }

    /// True while any effect is still running.
    pub fn any_active(&self, now: Instant) -> bool {
        Effect::ALL.iter().any(|effect| self.is_active(*effect, now))
    }

    /// Forget timers once everything has expired. Returns true if cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() && !self.any_active(now) {
            self.started_at = None;
            return true;
        }
        false
    }
}
