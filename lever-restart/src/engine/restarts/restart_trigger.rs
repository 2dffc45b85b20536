use log::trace;

use super::RestartState;
use crate::engine::SearchContext;
use crate::engine::SearchMode;

impl RestartState {
    /// Determines whether the search should restart before its next decision; it considers the
    /// following conditions (in this order):
    /// - Restarts should be enabled ([`RestartOptions::restart`]), the search should not be at
    ///   the root, and the number of conflicts should have reached the current threshold (see
    ///   [`RestartState::update_focused_limit`]).
    /// - In stable mode, the reluctant-doubling schedule of the search decides.
    /// - In focused mode, a restart takes place if the fast glue average is at least the slow glue
    ///   average inflated by [`RestartOptions::restart_margin_percent`]; i.e. the clauses which
    ///   are learned recently are no better than the long-term trend.
    ///
    /// [`RestartOptions::restart`]: crate::RestartOptions::restart
    /// [`RestartOptions::restart_margin_percent`]: crate::RestartOptions::restart_margin_percent
    pub fn should_restart(&self, search: &mut impl SearchContext) -> bool {
        if !self.options.restart {
            return false;
        }
        if search.decision_level() == 0 {
            return false;
        }
        if search.num_conflicts() < self.limits.conflicts_threshold {
            return false;
        }

        match search.search_mode() {
            SearchMode::Stable => search.reluctant_triggered(),
            SearchMode::Focused => {
                let fast = search.fast_glue_average();
                let slow = search.slow_glue_average();
                let margin = (100.0 + self.options.restart_margin_percent as f64) / 100.0;
                let limit = margin * slow;
                trace!(
                    "restart glue limit {limit} = {margin:.02} * {slow} (slow glue) {} {fast} (fast glue)",
                    if limit > fast {
                        '>'
                    } else if limit == fast {
                        '='
                    } else {
                        '<'
                    }
                );
                limit <= fast
            }
        }
    }
}
