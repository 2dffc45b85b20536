#![cfg(test)]
//! This module exposes a scripted [`SearchContext`] which allows setting up specific scenarios
//! under which to test the restart operations.
use crate::engine::SearchContext;
use crate::engine::SearchMode;

/// A search whose state is set directly by the test.
#[derive(Debug, Default)]
pub(crate) struct TestSearch {
    pub(crate) decision_level: usize,
    pub(crate) num_conflicts: u64,
    pub(crate) search_mode: SearchMode,
    pub(crate) fast_glue: f64,
    pub(crate) slow_glue: f64,
    pub(crate) reluctant_trigger: bool,
    pub(crate) num_backtracks_to_root: usize,
    pub(crate) reported: Vec<char>,
}

impl SearchContext for TestSearch {
    fn decision_level(&self) -> usize {
        self.decision_level
    }

    fn num_conflicts(&self) -> u64 {
        self.num_conflicts
    }

    fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    fn fast_glue_average(&self) -> f64 {
        self.fast_glue
    }

    fn slow_glue_average(&self) -> f64 {
        self.slow_glue
    }

    fn reluctant_triggered(&mut self) -> bool {
        std::mem::take(&mut self.reluctant_trigger)
    }

    fn backtrack_to_root(&mut self) {
        self.decision_level = 0;
        self.num_backtracks_to_root += 1;
    }

    fn report(&mut self, event: char) {
        self.reported.push(event);
    }
}
