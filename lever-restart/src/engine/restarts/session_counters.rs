/// The decisions and conflicts of the current search session, i.e. since the last restart.
///
/// The search loop increments the counters; they are consumed when a restart takes place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    decisions_since_restart: u64,
    conflicts_since_restart: u64,
}

impl SessionCounters {
    pub fn notify_decision(&mut self) {
        self.decisions_since_restart += 1;
    }

    pub fn notify_conflict(&mut self) {
        self.conflicts_since_restart += 1;
    }

    pub fn decisions_since_restart(&self) -> u64 {
        self.decisions_since_restart
    }

    pub fn conflicts_since_restart(&self) -> u64 {
        self.conflicts_since_restart
    }

    /// The ratio of conflicts to decisions in the session, or `None` if no decision was made.
    pub fn reward(&self) -> Option<f64> {
        (self.decisions_since_restart > 0)
            .then(|| self.conflicts_since_restart as f64 / self.decisions_since_restart as f64)
    }

    /// Returns the counters of the session which just ended and starts a new one.
    pub(crate) fn take(&mut self) -> SessionCounters {
        std::mem::take(self)
    }
}

/// The limits which gate the restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartLimits {
    /// The conflict count at or after which a restart becomes eligible.
    pub conflicts_threshold: u64,
}
