use super::VariableId;

/// The activity-ordered structure from which the branching heuristic selects variables.
///
/// After any sequence of [`BranchingActivity::set_activity`] calls,
/// [`BranchingActivity::rebuild`] has to be called before the structure is queried again; it is
/// required to restore a valid priority ordering regardless of how the activities were changed.
pub trait BranchingActivity {
    /// The number of variables which have an activity.
    fn num_variables(&self) -> usize;

    /// Overwrites the activity of `variable`; the ordering may be invalid until
    /// [`BranchingActivity::rebuild`] is called.
    fn set_activity(&mut self, variable: VariableId, value: f64);

    /// Restores the priority ordering after arbitrary activity mutation.
    fn rebuild(&mut self);
}
