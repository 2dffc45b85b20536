use enum_map::EnumMap;

use super::Lever;
use super::Record;
use super::SlidingWindow;
use crate::lever_assert_simple;

/// The number of rewards and their sum for one [`Lever`], computed over the bandit window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmStatistics {
    pub num_samples: u64,
    pub sum_of_rewards: f64,
}

impl ArmStatistics {
    /// The mean reward, or `None` if the arm has not been sampled within the window.
    pub fn mean(&self) -> Option<f64> {
        (self.num_samples > 0).then(|| self.sum_of_rewards / self.num_samples as f64)
    }
}

/// Chooses between [`Lever::Reset`] and [`Lever::Restart`] with the UCB1 policy \[1\], computed
/// over a [`SlidingWindow`] of the most recent rewards rather than the whole history so that the
/// choice follows the search as its phase changes \[2\].
///
/// Each arm is scored as `mean + c * sqrt(2 * ln(W) / n)`, where `W` is the number of rewards in
/// the window and `n` the number of rewards of the arm. As long as an arm has no reward in the
/// window it is selected outright, [`Lever::Restart`] first.
///
/// # Bibliography
/// \[1\] P. Auer, N. Cesa-Bianchi, and P. Fischer, ‘Finite-time analysis of the multiarmed bandit
/// problem’, Machine Learning, vol. 47, pp. 235–256, 2002.
///
/// \[2\] A. Garivier and E. Moulines, ‘On upper-confidence bound policies for switching bandit
/// problems’, in Algorithmic Learning Theory, 2011, pp. 174–188.
#[derive(Debug, Clone)]
pub struct LeverBandit {
    window: SlidingWindow<Record>,
    exploration_constant: f64,
    /// The lever which was applied at the start of the current session; `None` until the first
    /// restart.
    last_lever: Option<Lever>,
}

impl LeverBandit {
    pub fn new(window_capacity: usize, exploration_constant: f64) -> Self {
        lever_assert_simple!(exploration_constant > 0.0);
        LeverBandit {
            window: SlidingWindow::new(window_capacity),
            exploration_constant,
            last_lever: None,
        }
    }

    /// Stores the reward which was observed after applying `lever`.
    ///
    /// This does not change [`LeverBandit::last_lever`]; the caller records the outcome of the
    /// previous lever before selecting the next one.
    pub fn record_outcome(&mut self, lever: Lever, reward: f64) {
        self.window.push(Record { lever, reward });
    }

    pub fn select_lever(&self) -> Lever {
        let arms = self.arm_statistics();
        let reset = arms[Lever::Reset];
        let restart = arms[Lever::Restart];

        if restart.num_samples == 0 {
            return Lever::Restart;
        }
        if reset.num_samples == 0 {
            return Lever::Reset;
        }

        let log_window = (self.window.effective_size() as f64).ln();
        let reset_score = self.upper_confidence_bound(reset, log_window);
        let restart_score = self.upper_confidence_bound(restart, log_window);

        if reset_score > restart_score {
            Lever::Reset
        } else {
            Lever::Restart
        }
    }

    /// Partitions the rewards in the window by arm.
    pub fn arm_statistics(&self) -> EnumMap<Lever, ArmStatistics> {
        let mut arms: EnumMap<Lever, ArmStatistics> = EnumMap::default();
        for record in self.window.iter() {
            let arm = &mut arms[record.lever];
            arm.num_samples += 1;
            arm.sum_of_rewards += record.reward;
        }
        arms
    }

    pub fn last_lever(&self) -> Option<Lever> {
        self.last_lever
    }

    pub(crate) fn set_last_lever(&mut self, lever: Lever) {
        self.last_lever = Some(lever);
    }

    pub fn window(&self) -> &SlidingWindow<Record> {
        &self.window
    }

    fn upper_confidence_bound(&self, arm: ArmStatistics, log_window: f64) -> f64 {
        let num_samples = arm.num_samples as f64;
        let mean = arm.sum_of_rewards / num_samples;
        let bonus = self.exploration_constant * (2.0 * log_window / num_samples).sqrt();
        mean + bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bandit_with(capacity: usize, records: &[(Lever, f64)]) -> LeverBandit {
        let mut bandit = LeverBandit::new(capacity, 1.0);
        for &(lever, reward) in records {
            bandit.record_outcome(lever, reward);
        }
        bandit
    }

    #[test]
    fn empty_window_selects_restart() {
        let bandit = LeverBandit::new(10, 1.0);
        assert_eq!(bandit.select_lever(), Lever::Restart);
    }

    #[test]
    fn untried_reset_is_explored_after_one_restart() {
        let bandit = bandit_with(10, &[(Lever::Restart, 0.3)]);
        assert_eq!(bandit.select_lever(), Lever::Reset);
    }

    #[test]
    fn untried_restart_takes_precedence() {
        let bandit = bandit_with(10, &[(Lever::Reset, 0.9), (Lever::Reset, 0.8)]);
        assert_eq!(bandit.select_lever(), Lever::Restart);
    }

    #[test]
    fn higher_mean_wins_with_equal_counts() {
        let bandit = bandit_with(
            4,
            &[
                (Lever::Restart, 0.5),
                (Lever::Restart, 0.7),
                (Lever::Reset, 0.2),
                (Lever::Reset, 0.9),
            ],
        );

        let arms = bandit.arm_statistics();
        assert_eq!(arms[Lever::Restart].num_samples, 2);
        assert_eq!(arms[Lever::Reset].num_samples, 2);
        let restart_mean = arms[Lever::Restart].mean().unwrap();
        let reset_mean = arms[Lever::Reset].mean().unwrap();
        assert!((restart_mean - 0.6).abs() < 1e-12);
        assert!((reset_mean - 0.55).abs() < 1e-12);

        // The bonus is identical for both arms, so the means decide
        let log_window = 4.0_f64.ln();
        let restart_score = bandit.upper_confidence_bound(arms[Lever::Restart], log_window);
        let reset_score = bandit.upper_confidence_bound(arms[Lever::Reset], log_window);
        let bonus = (2.0 * log_window / 2.0).sqrt();
        assert!((restart_score - (restart_mean + bonus)).abs() < 1e-12);
        assert!((reset_score - (reset_mean + bonus)).abs() < 1e-12);
        assert!(restart_score > reset_score);

        assert_eq!(bandit.select_lever(), Lever::Restart);
    }

    #[test]
    fn higher_mean_reset_wins_with_equal_counts() {
        let bandit = bandit_with(
            10,
            &[
                (Lever::Restart, 0.1),
                (Lever::Reset, 0.4),
                (Lever::Restart, 0.2),
                (Lever::Reset, 0.6),
            ],
        );
        assert_eq!(bandit.select_lever(), Lever::Reset);
    }

    #[test]
    fn fewer_samples_win_with_equal_means() {
        let bandit = bandit_with(
            10,
            &[
                (Lever::Restart, 0.5),
                (Lever::Restart, 0.5),
                (Lever::Restart, 0.5),
                (Lever::Reset, 0.5),
            ],
        );
        assert_eq!(bandit.select_lever(), Lever::Reset);

        let bandit = bandit_with(
            10,
            &[
                (Lever::Reset, 0.5),
                (Lever::Reset, 0.5),
                (Lever::Restart, 0.5),
                (Lever::Reset, 0.5),
            ],
        );
        assert_eq!(bandit.select_lever(), Lever::Restart);
    }

    #[test]
    fn exact_tie_selects_restart() {
        let bandit = bandit_with(10, &[(Lever::Reset, 0.25), (Lever::Restart, 0.25)]);
        assert_eq!(bandit.select_lever(), Lever::Restart);
    }

    #[test]
    fn only_the_window_is_taken_into_account() {
        // The early rewards favour resets, but they are pushed out of the window
        let mut bandit = bandit_with(
            4,
            &[
                (Lever::Reset, 1.0),
                (Lever::Reset, 1.0),
                (Lever::Restart, 0.0),
            ],
        );
        assert_eq!(bandit.select_lever(), Lever::Reset);

        for _ in 0..4 {
            bandit.record_outcome(Lever::Restart, 0.5);
        }
        assert_eq!(bandit.arm_statistics()[Lever::Reset].num_samples, 0);
        assert_eq!(bandit.select_lever(), Lever::Reset);
        assert_eq!(bandit.window().effective_size(), 4);
    }

    #[test]
    fn recording_does_not_change_the_last_lever() {
        let mut bandit = LeverBandit::new(4, 1.0);
        assert_eq!(bandit.last_lever(), None);
        bandit.set_last_lever(Lever::Restart);
        bandit.record_outcome(Lever::Reset, 0.1);
        assert_eq!(bandit.last_lever(), Some(Lever::Restart));
    }
}
