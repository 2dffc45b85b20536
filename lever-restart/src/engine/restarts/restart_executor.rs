use log::debug;
use log::warn;

use super::Lever;
use super::RestartState;
use crate::basic_types::time::Instant;
use crate::basic_types::Random;
use crate::branching::BranchingActivity;
use crate::branching::VariableId;
use crate::containers::StorageKey;
use crate::engine::SearchContext;
use crate::engine::SearchMode;
use crate::lever_assert_simple;
use crate::statistics::moving_averages::MovingAverage;

impl RestartState {
    /// Executes a restart and returns the [`Lever`] which was pulled.
    ///
    /// The search is backtracked to the root, after which the session which just ended is scored
    /// (conflicts per decision) and fed to the bandit under the previously pulled lever. The
    /// bandit then selects the lever for the next session; in case of [`Lever::Reset`], the
    /// activities of all variables are overwritten with small random values (see
    /// [`RestartOptions::reset_perturbation_scale`]) and the ordering is rebuilt.
    ///
    /// In focused mode, this also determines when the next restart becomes eligible (see
    /// [`RestartState::update_focused_limit`]).
    ///
    /// [`RestartOptions::reset_perturbation_scale`]: crate::RestartOptions::reset_perturbation_scale
    pub fn execute_restart(
        &mut self,
        search: &mut impl SearchContext,
        activities: &mut impl BranchingActivity,
    ) -> Lever {
        let start = Instant::now();
        lever_assert_simple!(
            search.decision_level() > 0,
            "A restart is executed at the root"
        );

        let mode = search.search_mode();
        self.statistics.counters.num_restarts += 1;
        match mode {
            SearchMode::Stable => self.statistics.counters.num_stable_restarts += 1,
            SearchMode::Focused => self.statistics.counters.num_focused_restarts += 1,
        }

        search.backtrack_to_root();

        let ended_session = self.session.take();
        if let Some(last_lever) = self.bandit.last_lever() {
            match ended_session.reward() {
                Some(reward) => {
                    self.bandit.record_outcome(last_lever, reward);
                    self.statistics.counters.average_reward.add_term(reward);
                }
                None => {
                    debug!(
                        "not recording the outcome of {last_lever}, the session made no decisions"
                    );
                    self.statistics.counters.num_skipped_rewards += 1;
                }
            }
        }

        let lever = self.bandit.select_lever();
        self.bandit.set_last_lever(lever);

        match lever {
            Lever::Reset => {
                perturb_activities(
                    activities,
                    &mut self.random_generator,
                    self.options.reset_perturbation_scale,
                );
                self.statistics.counters.num_resets += 1;
            }
            Lever::Restart => self.statistics.counters.num_plain_restarts += 1,
        }

        if mode == SearchMode::Focused {
            self.update_focused_limit(&*search);
        }

        search.report('R');
        debug!(
            "{mode} restart {} pulled {lever} after {} conflicts and {} decisions",
            self.statistics.counters.num_restarts,
            ended_session.conflicts_since_restart(),
            ended_session.decisions_since_restart(),
        );

        self.statistics.time_spent_restarting += start.elapsed();
        lever
    }
}

/// Sets the activity of every variable to a value drawn from `[0, scale)` and rebuilds the
/// ordering.
fn perturb_activities(
    activities: &mut impl BranchingActivity,
    random_generator: &mut dyn Random,
    scale: f64,
) {
    let num_variables = activities.num_variables();
    if num_variables == 0 {
        warn!("Resetting the activities while there are no variables");
    }

    for index in 0..num_variables {
        let value = random_generator.generate_f64_in_range(0.0, scale);
        lever_assert_simple!(
            (0.0..scale).contains(&value),
            "The perturbed activity {value} is not in [0, {scale})"
        );
        activities.set_activity(VariableId::create_from_index(index), value);
    }

    activities.rebuild();
}

#[cfg(test)]
mod tests {
    use super::super::test_search::TestSearch;
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::branching::VariableActivities;
    use crate::RestartOptions;

    fn focused_search_at_level(decision_level: usize) -> TestSearch {
        TestSearch {
            decision_level,
            num_conflicts: 10,
            ..Default::default()
        }
    }

    fn play_session(state: &mut RestartState, decisions: u64, conflicts: u64) {
        for _ in 0..decisions {
            state.session_mut().notify_decision();
        }
        for _ in 0..conflicts {
            state.session_mut().notify_conflict();
        }
    }

    #[test]
    fn first_restart_pulls_restart_and_records_nothing() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let mut search = focused_search_at_level(4);
        let mut activities = VariableActivities::new(3);
        play_session(&mut state, 5, 2);

        let lever = state.execute_restart(&mut search, &mut activities);

        assert_eq!(lever, Lever::Restart);
        assert_eq!(state.bandit().last_lever(), Some(Lever::Restart));
        assert_eq!(state.bandit().window().effective_size(), 0);
        assert_eq!(state.session().decisions_since_restart(), 0);
        assert_eq!(state.session().conflicts_since_restart(), 0);
        assert_eq!(search.decision_level, 0);
        assert_eq!(search.num_backtracks_to_root, 1);
        assert_eq!(search.reported, vec!['R']);
    }

    #[test]
    fn second_restart_records_reward_and_explores_reset() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let mut activities = VariableActivities::new(3);

        let _ = state.execute_restart(&mut focused_search_at_level(2), &mut activities);
        play_session(&mut state, 8, 2);
        let lever = state.execute_restart(&mut focused_search_at_level(2), &mut activities);

        assert_eq!(lever, Lever::Reset);
        let window = state.bandit().window();
        assert_eq!(window.effective_size(), 1);
        let recorded = window.iter().next().expect("one record");
        assert_eq!(recorded.lever, Lever::Restart);
        assert_eq!(recorded.reward, 0.25);
        assert_eq!(state.statistics().average_reward(), 0.25);
        assert_eq!(state.statistics().num_resets(), 1);
        assert_eq!(state.statistics().num_plain_restarts(), 1);
    }

    #[test]
    fn session_without_decisions_is_not_recorded() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let mut activities = VariableActivities::new(3);

        let _ = state.execute_restart(&mut focused_search_at_level(2), &mut activities);
        play_session(&mut state, 0, 3);
        let _ = state.execute_restart(&mut focused_search_at_level(2), &mut activities);

        assert_eq!(state.bandit().window().effective_size(), 0);
        assert_eq!(state.statistics().num_skipped_rewards(), 1);
        assert_eq!(state.session().conflicts_since_restart(), 0);
        // Nothing was recorded, so the bandit is still forced to explore restart
        assert_eq!(state.bandit().last_lever(), Some(Lever::Restart));
    }

    #[test]
    fn reset_perturbs_all_activities_below_scale() {
        let options = RestartOptions::default();
        let scale = options.reset_perturbation_scale;
        let mut state = RestartState::new(options).expect("valid options");
        let mut activities = VariableActivities::new(50);
        for id in 0..50 {
            for _ in 0..id {
                activities.bump_activity(VariableId::new(id));
            }
        }

        let _ = state.execute_restart(&mut focused_search_at_level(1), &mut activities);
        play_session(&mut state, 4, 4);
        let lever = state.execute_restart(&mut focused_search_at_level(1), &mut activities);

        assert_eq!(lever, Lever::Reset);
        for id in 0..50 {
            let activity = activities.activity(VariableId::new(id));
            assert!((0.0..scale).contains(&activity), "{activity} not in [0, {scale})");
        }
        assert!(activities.is_ordered());
    }

    #[test]
    fn perturbation_uses_the_provided_random_source() {
        let mut activities = VariableActivities::new(3);
        let mut rng = TestRandom {
            floats: vec![1e-6, 5e-6, 3e-6],
        };

        perturb_activities(&mut activities, &mut rng, 1e-5);

        assert_eq!(activities.activity(VariableId::new(0)), 1e-6);
        assert_eq!(activities.activity(VariableId::new(1)), 5e-6);
        assert_eq!(activities.activity(VariableId::new(2)), 3e-6);
        assert_eq!(activities.most_active(), Some(VariableId::new(1)));
        assert!(rng.floats.is_empty());
    }

    #[test]
    fn perturbing_no_variables_draws_nothing() {
        let mut activities = VariableActivities::new(0);
        let mut rng = TestRandom::default();
        perturb_activities(&mut activities, &mut rng, 1e-5);
        assert_eq!(activities.most_active(), None);
    }

    #[test]
    fn focused_restart_updates_threshold() {
        let mut state = RestartState::new(RestartOptions {
            restart_base_interval: 1000,
            ..Default::default()
        })
        .expect("valid options");
        let mut activities = VariableActivities::new(2);
        let mut search = TestSearch {
            decision_level: 3,
            num_conflicts: 500,
            ..Default::default()
        };

        let _ = state.execute_restart(&mut search, &mut activities);

        // One restart: 1000 + log2(1) - 1
        assert_eq!(state.limits().conflicts_threshold, 1499);
        assert_eq!(state.statistics().num_focused_restarts(), 1);
    }

    #[test]
    fn stable_restart_leaves_threshold_untouched() {
        let mut state = RestartState::new(RestartOptions {
            restart_base_interval: 1000,
            ..Default::default()
        })
        .expect("valid options");
        let mut activities = VariableActivities::new(2);
        let mut search = TestSearch {
            decision_level: 3,
            num_conflicts: 500,
            search_mode: SearchMode::Stable,
            ..Default::default()
        };

        let _ = state.execute_restart(&mut search, &mut activities);

        assert_eq!(state.limits().conflicts_threshold, 1000);
        assert_eq!(state.statistics().num_stable_restarts(), 1);
        assert_eq!(state.statistics().num_focused_restarts(), 0);
    }

    #[test]
    #[should_panic]
    fn restart_at_the_root_panics() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let mut activities = VariableActivities::new(2);
        let _ = state.execute_restart(&mut focused_search_at_level(0), &mut activities);
    }

    #[test]
    fn restart_counters_add_up() {
        let mut state = RestartState::new(RestartOptions::default()).expect("valid options");
        let mut activities = VariableActivities::new(5);

        for round in 0..40_u64 {
            let mut search = TestSearch {
                decision_level: 2,
                num_conflicts: round * 10,
                search_mode: if round % 3 == 0 {
                    SearchMode::Stable
                } else {
                    SearchMode::Focused
                },
                ..Default::default()
            };
            play_session(&mut state, 1 + round % 7, round % 5);
            let _ = state.execute_restart(&mut search, &mut activities);
        }

        let statistics = state.statistics();
        assert_eq!(statistics.num_restarts(), 40);
        assert_eq!(
            statistics.num_restarts(),
            statistics.num_resets() + statistics.num_plain_restarts()
        );
        assert_eq!(
            statistics.num_restarts(),
            statistics.num_stable_restarts() + statistics.num_focused_restarts()
        );
        assert!(state.bandit().window().effective_size() <= 20);
    }
}
