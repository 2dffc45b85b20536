use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::LeverBandit;
use super::RestartLimits;
use super::RestartOptions;
use super::RestartOptionsError;
use super::RestartStatistics;
use super::SessionCounters;

/// All of the state of the restart subsystem.
///
/// The search loop owns one [`RestartState`] and passes it to every restart operation: it asks
/// [`RestartState::should_restart`] before each decision and calls
/// [`RestartState::execute_restart`] when the answer is positive. In between, it reports its
/// decisions and conflicts to the [`SessionCounters`] (see [`RestartState::session_mut`]).
///
/// A portfolio of solvers should give every worker its own [`RestartState`].
#[derive(Debug)]
pub struct RestartState {
    pub(crate) options: RestartOptions,
    pub(crate) session: SessionCounters,
    pub(crate) limits: RestartLimits,
    pub(crate) bandit: LeverBandit,
    pub(crate) statistics: RestartStatistics,
    /// Seeded once from [`RestartOptions::random_seed`] such that runs can be replayed.
    pub(crate) random_generator: SmallRng,
}

impl RestartState {
    pub fn new(options: RestartOptions) -> Result<Self, RestartOptionsError> {
        options.validate()?;

        Ok(RestartState {
            session: SessionCounters::default(),
            limits: RestartLimits {
                conflicts_threshold: options.restart_base_interval,
            },
            bandit: LeverBandit::new(options.window_capacity, options.exploration_constant),
            statistics: RestartStatistics::default(),
            random_generator: SmallRng::seed_from_u64(options.random_seed),
            options,
        })
    }

    pub fn options(&self) -> &RestartOptions {
        &self.options
    }

    pub fn session(&self) -> &SessionCounters {
        &self.session
    }

    /// The counters which the search loop increments for every decision and conflict.
    pub fn session_mut(&mut self) -> &mut SessionCounters {
        &mut self.session
    }

    pub fn limits(&self) -> &RestartLimits {
        &self.limits
    }

    pub fn bandit(&self) -> &LeverBandit {
        &self.bandit
    }

    pub fn statistics(&self) -> &RestartStatistics {
        &self.statistics
    }
}
