//! The restart subsystem: when to restart ([`RestartState::should_restart`]), what to do when
//! restarting ([`RestartState::execute_restart`]) and when the next focused-mode restart becomes
//! eligible ([`RestartState::update_focused_limit`]).
//!
//! The choice between a [`Lever::Reset`] and a [`Lever::Restart`] is learned online by a
//! [`LeverBandit`], which applies UCB1 to the rewards in a [`SlidingWindow`] of recent sessions.
mod lever;
mod lever_bandit;
mod restart_executor;
mod restart_options;
mod restart_scheduler;
mod restart_state;
mod restart_statistics;
mod restart_trigger;
mod session_counters;
mod sliding_window;
mod test_search;

pub use lever::Lever;
pub use lever::Record;
pub use lever_bandit::ArmStatistics;
pub use lever_bandit::LeverBandit;
pub use restart_options::RestartOptions;
pub use restart_options::RestartOptionsError;
pub use restart_state::RestartState;
pub use restart_statistics::RestartStatistics;
pub use session_counters::RestartLimits;
pub use session_counters::SessionCounters;
pub use sliding_window::SlidingWindow;
