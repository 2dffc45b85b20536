use std::fmt::Display;

/// The two modes in which the search alternates.
///
/// In focused mode the solver restarts often, driven by the quality of the learned clauses; in
/// stable mode restarts are rare and paced by a reluctant-doubling schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SearchMode {
    #[default]
    Focused,
    Stable,
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Focused => write!(f, "focused"),
            SearchMode::Stable => write!(f, "stable"),
        }
    }
}

/// The view of the search procedure which the restart subsystem reads and acts upon.
///
/// The restart subsystem never propagates, learns or branches; every such concern stays with the
/// implementor of this trait. See [`GlueAverages`] and [`ReluctantDoubling`] for the state which
/// an implementor typically keeps to answer the glue and stable-mode queries.
///
/// [`GlueAverages`]: crate::GlueAverages
/// [`ReluctantDoubling`]: crate::ReluctantDoubling
pub trait SearchContext {
    /// The current decision level; 0 is the root.
    fn decision_level(&self) -> usize;

    /// The number of conflicts encountered since the start of the search.
    fn num_conflicts(&self) -> u64;

    fn search_mode(&self) -> SearchMode;

    /// The short-term average of the glue of the learned clauses.
    fn fast_glue_average(&self) -> f64;

    /// The long-term average of the glue of the learned clauses.
    fn slow_glue_average(&self) -> f64;

    /// Returns whether the stable-mode schedule asks for a restart; a positive answer consumes the
    /// trigger.
    fn reluctant_triggered(&mut self) -> bool;

    /// Backtracks to decision level 0, restoring the trail and the propagation state.
    fn backtrack_to_root(&mut self);

    /// Reports a single-character event to the reporting sink of the solver.
    fn report(&mut self, _event: char) {}
}
