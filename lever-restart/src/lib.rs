//! # Lever restarts
//! A restart policy for conflict-driven clause-learning (CDCL) search which learns, while
//! searching, whether a restart should also reset the branching activities.
//!
//! The search loop owns a [`RestartState`] and interacts with it in three places:
//! - It notifies the [`SessionCounters`] of every decision and conflict (see
//!   [`RestartState::session_mut`]).
//! - Before every decision, it asks [`RestartState::should_restart`] whether to restart. In
//!   focused mode, this compares the fast and slow averages of the glue of learned clauses; in
//!   stable mode it follows a reluctant-doubling schedule.
//! - When a restart is due, it calls [`RestartState::execute_restart`], which backtracks to the
//!   root, scores the session which just ended and lets a [`LeverBandit`] decide between a plain
//!   [`Lever::Restart`] and a [`Lever::Reset`] of the activities.
//!
//! The search procedure is seen through the [`SearchContext`] trait, and the activities through
//! the [`branching::BranchingActivity`] trait.
//!
//! # Example
//! ```rust
//! # use lever_restart::branching::VariableActivities;
//! # use lever_restart::RestartOptions;
//! # use lever_restart::RestartState;
//! # use lever_restart::SearchContext;
//! # use lever_restart::SearchMode;
//! #[derive(Debug, Default)]
//! struct Search {
//!     decision_level: usize,
//!     num_conflicts: u64,
//! }
//!
//! impl SearchContext for Search {
//!     fn decision_level(&self) -> usize {
//!         self.decision_level
//!     }
//!     fn num_conflicts(&self) -> u64 {
//!         self.num_conflicts
//!     }
//!     fn search_mode(&self) -> SearchMode {
//!         SearchMode::Focused
//!     }
//!     fn fast_glue_average(&self) -> f64 {
//!         6.0
//!     }
//!     fn slow_glue_average(&self) -> f64 {
//!         4.0
//!     }
//!     fn reluctant_triggered(&mut self) -> bool {
//!         false
//!     }
//!     fn backtrack_to_root(&mut self) {
//!         self.decision_level = 0;
//!     }
//! }
//!
//! let mut state = RestartState::new(RestartOptions::default()).unwrap();
//! let mut activities = VariableActivities::new(10);
//! let mut search = Search {
//!     decision_level: 3,
//!     num_conflicts: 5,
//! };
//!
//! if state.should_restart(&mut search) {
//!     let _lever = state.execute_restart(&mut search, &mut activities);
//! }
//! assert_eq!(search.decision_level, 0);
//! assert_eq!(state.statistics().num_restarts(), 1);
//! ```
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub(crate) mod engine;
pub mod statistics;

pub use convert_case;
pub use rand;

pub use crate::basic_types::Random;
pub use crate::engine::restarts::*;
pub use crate::engine::GlueAverages;
pub use crate::engine::ReluctantDoubling;
pub use crate::engine::SearchContext;
pub use crate::engine::SearchMode;
