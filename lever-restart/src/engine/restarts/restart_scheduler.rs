use log::trace;

use super::RestartState;
use crate::engine::SearchContext;
use crate::engine::SearchMode;
use crate::lever_assert_simple;

/// The number of conflicts between the current conflict and the next eligible focused-mode
/// restart.
///
/// The gap grows logarithmically in the number of restarts which have taken place so far;
/// `restarts_so_far` is expected to include the restart which was just executed.
pub(crate) fn focused_restart_delta(base_interval: u64, restarts_so_far: u64) -> u64 {
    if restarts_so_far == 0 {
        return base_interval;
    }
    base_interval
        .saturating_add(restarts_so_far.ilog2() as u64)
        .saturating_sub(1)
}

impl RestartState {
    /// Recomputes the conflict count at which the next focused-mode restart becomes eligible.
    ///
    /// This should only be called while the search is in [`SearchMode::Focused`].
    pub fn update_focused_limit(&mut self, search: &impl SearchContext) {
        lever_assert_simple!(
            search.search_mode() == SearchMode::Focused,
            "The focused restart limit is updated in stable mode"
        );

        let restarts = self.statistics.counters.num_restarts;
        let delta = focused_restart_delta(self.options.restart_base_interval, restarts);
        self.limits.conflicts_threshold = search.num_conflicts().saturating_add(delta);

        trace!(
            "new focused restart limit {} after {delta} conflicts",
            self.limits.conflicts_threshold
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_search::TestSearch;
    use super::*;
    use crate::RestartOptions;

    #[test]
    fn delta_after_four_restarts() {
        assert_eq!(focused_restart_delta(1000, 4), 1001);
    }

    #[test]
    fn delta_without_restarts_is_the_base_interval() {
        assert_eq!(focused_restart_delta(1000, 0), 1000);
        assert_eq!(focused_restart_delta(1, 0), 1);
    }

    #[test]
    fn delta_is_non_decreasing_in_the_number_of_restarts() {
        for base_interval in [1, 2, 50, 1000] {
            let mut previous = focused_restart_delta(base_interval, 1);
            for restarts in 2..10_000 {
                let delta = focused_restart_delta(base_interval, restarts);
                assert!(delta >= previous);
                previous = delta;
            }
        }
    }

    #[test]
    fn saturates_for_the_first_restart_with_unit_interval() {
        assert_eq!(focused_restart_delta(1, 1), 0);
    }

    #[test]
    fn delta_saturates_for_huge_base_intervals() {
        assert_eq!(focused_restart_delta(u64::MAX, 4), u64::MAX - 1);
        assert_eq!(focused_restart_delta(u64::MAX, u64::MAX), u64::MAX - 1);
        assert_eq!(focused_restart_delta(u64::MAX, 0), u64::MAX);
    }

    #[test]
    fn huge_base_interval_saturates_the_threshold() {
        let mut state = RestartState::new(RestartOptions {
            restart_base_interval: u64::MAX,
            ..Default::default()
        })
        .expect("valid options");
        state.statistics.counters.num_restarts = 4;

        let search = TestSearch {
            num_conflicts: 250,
            ..Default::default()
        };
        state.update_focused_limit(&search);

        assert_eq!(state.limits().conflicts_threshold, u64::MAX);
    }

    #[test]
    fn threshold_is_offset_from_current_conflicts() {
        let mut state = RestartState::new(RestartOptions {
            restart_base_interval: 1000,
            ..Default::default()
        })
        .expect("valid options");
        state.statistics.counters.num_restarts = 4;

        let search = TestSearch {
            num_conflicts: 250,
            ..Default::default()
        };
        state.update_focused_limit(&search);

        assert_eq!(state.limits().conflicts_threshold, 1251);
    }

    #[test]
    #[should_panic]
    fn updating_in_stable_mode_panics() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let search = TestSearch {
            search_mode: SearchMode::Stable,
            ..Default::default()
        };
        state.update_focused_limit(&search);
    }
}
