use crate::basic_types::time::Duration;
use crate::create_statistics_struct;
use crate::statistics::moving_averages::CumulativeMovingAverage;
use crate::statistics::moving_averages::MovingAverage;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Structure responsible for storing the statistics of the restart subsystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestartStatistics {
    pub(crate) counters: RestartCounters,
    /// The amount of time which is spent executing restarts.
    pub(crate) time_spent_restarting: Duration,
}

create_statistics_struct!(
    /// Counters of the restart events
    RestartCounters {
        /// The number of times the solver has restarted
        num_restarts: u64,
        /// The number of restarts which took place in stable mode
        num_stable_restarts: u64,
        /// The number of restarts which took place in focused mode
        num_focused_restarts: u64,
        /// The number of restarts after which the activities were randomised
        num_resets: u64,
        /// The number of restarts after which the activities were left untouched
        num_plain_restarts: u64,
        /// The number of sessions without decisions, whose reward was not recorded
        num_skipped_rewards: u64,
        /// The average reward fed to the lever bandit
        average_reward: CumulativeMovingAverage<f64>,
});

impl RestartStatistics {
    pub fn log(&self, statistic_logger: StatisticLogger) {
        self.counters.log(statistic_logger.clone());
        statistic_logger
            .attach_to_prefix("time_spent_restarting")
            .log_statistic(self.time_spent_restarting.as_secs_f64());
    }

    pub fn num_restarts(&self) -> u64 {
        self.counters.num_restarts
    }

    pub fn num_stable_restarts(&self) -> u64 {
        self.counters.num_stable_restarts
    }

    pub fn num_focused_restarts(&self) -> u64 {
        self.counters.num_focused_restarts
    }

    pub fn num_resets(&self) -> u64 {
        self.counters.num_resets
    }

    pub fn num_plain_restarts(&self) -> u64 {
        self.counters.num_plain_restarts
    }

    pub fn num_skipped_rewards(&self) -> u64 {
        self.counters.num_skipped_rewards
    }

    pub fn average_reward(&self) -> f64 {
        self.counters.average_reward.value()
    }

    pub fn time_spent_restarting(&self) -> Duration {
        self.time_spent_restarting
    }
}
