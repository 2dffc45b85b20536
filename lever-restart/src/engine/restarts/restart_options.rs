use thiserror::Error;

use crate::engine::GlueAverages;
use crate::engine::ReluctantDoubling;

/// The options which are used by the restart subsystem to determine when a restart should occur
/// and how the decision between a reset and a plain restart is learned.
///
/// The default values follow the defaults of the Kissat SAT solver for the restart schedule
/// (margin, base interval, moving-average windows and reluctant doubling).
#[derive(Debug, Clone, Copy)]
pub struct RestartOptions {
    /// Whether restarts are performed at all.
    pub restart: bool,
    /// The margin (in percent) by which the slow glue average is inflated before it is compared
    /// with the fast glue average in focused mode. A greater value means fewer restarts.
    pub restart_margin_percent: u32,
    /// The minimum number of conflicts between two focused-mode restarts before the logarithmic
    /// growth is added (see [`RestartState::update_focused_limit`]).
    ///
    /// [`RestartState::update_focused_limit`]: crate::RestartState::update_focused_limit
    pub restart_base_interval: u64,
    /// The number of most recent rewards over which the lever bandit computes its statistics.
    pub window_capacity: usize,
    /// The constant `c` by which the exploration bonus of the UCB1 score is multiplied.
    pub exploration_constant: f64,
    /// After a reset, the activity of every variable is drawn uniformly from
    /// `[0, reset_perturbation_scale)`.
    pub reset_perturbation_scale: f64,
    /// The seed of the random number generator used for resets; the generator is seeded once such
    /// that a run can be replayed.
    pub random_seed: u64,
    /// The number of conflicts which is multiplied with the elements of the Luby sequence in
    /// stable mode.
    pub reluctant_period: u64,
    /// Once the reluctant-doubling schedule exceeds this number of conflicts it starts over; 0
    /// disables the limit.
    pub reluctant_limit: u64,
    /// The window of the fast exponential moving average of the glue.
    pub fast_glue_window: u64,
    /// The window of the slow exponential moving average of the glue.
    pub slow_glue_window: u64,
}

impl Default for RestartOptions {
    fn default() -> Self {
        Self {
            restart: true,
            restart_margin_percent: 10,
            restart_base_interval: 1,
            window_capacity: 20,
            exploration_constant: 1.0,
            reset_perturbation_scale: 1e-5,
            random_seed: 42,
            reluctant_period: 1024,
            reluctant_limit: 1_048_576,
            fast_glue_window: 33,
            slow_glue_window: 100_000,
        }
    }
}

/// Errors which are reported when [`RestartOptions`] describe an unusable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RestartOptionsError {
    #[error("the bandit window should hold at least one reward")]
    ZeroWindowCapacity,
    #[error("the exploration constant should be positive and finite, but it is {0}")]
    InvalidExplorationConstant(f64),
    #[error("the reset perturbation scale should be positive and finite, but it is {0}")]
    InvalidPerturbationScale(f64),
    #[error("the restart base interval should be at least 1")]
    ZeroBaseInterval,
    #[error("the {0} glue window should be at least 1")]
    ZeroGlueWindow(&'static str),
    #[error("the reluctant period should be at least 1")]
    ZeroReluctantPeriod,
    #[error("the reluctant limit {limit} is smaller than the reluctant period {period}")]
    ReluctantLimitBelowPeriod { limit: u64, period: u64 },
}

impl RestartOptions {
    /// Checks that the options can be used to create a [`RestartState`].
    ///
    /// [`RestartState`]: crate::RestartState
    pub fn validate(&self) -> Result<(), RestartOptionsError> {
        if self.window_capacity == 0 {
            return Err(RestartOptionsError::ZeroWindowCapacity);
        }
        if !(self.exploration_constant.is_finite() && self.exploration_constant > 0.0) {
            return Err(RestartOptionsError::InvalidExplorationConstant(
                self.exploration_constant,
            ));
        }
        if !(self.reset_perturbation_scale.is_finite() && self.reset_perturbation_scale > 0.0) {
            return Err(RestartOptionsError::InvalidPerturbationScale(
                self.reset_perturbation_scale,
            ));
        }
        if self.restart_base_interval == 0 {
            return Err(RestartOptionsError::ZeroBaseInterval);
        }
        if self.fast_glue_window == 0 {
            return Err(RestartOptionsError::ZeroGlueWindow("fast"));
        }
        if self.slow_glue_window == 0 {
            return Err(RestartOptionsError::ZeroGlueWindow("slow"));
        }
        if self.reluctant_period == 0 {
            return Err(RestartOptionsError::ZeroReluctantPeriod);
        }
        if self.reluctant_limit != 0 && self.reluctant_limit < self.reluctant_period {
            return Err(RestartOptionsError::ReluctantLimitBelowPeriod {
                limit: self.reluctant_limit,
                period: self.reluctant_period,
            });
        }
        Ok(())
    }

    /// The glue averages which the search should update for every learned clause, with the
    /// windows [`RestartOptions::fast_glue_window`] and [`RestartOptions::slow_glue_window`].
    pub fn glue_averages(&self) -> GlueAverages {
        GlueAverages::new(self.fast_glue_window, self.slow_glue_window)
    }

    /// The stable-mode schedule which the search should tick for every conflict.
    pub fn reluctant_doubling(&self) -> ReluctantDoubling {
        ReluctantDoubling::new(self.reluctant_period, self.reluctant_limit)
    }
}
