use log::warn;

use super::BranchingActivity;
use super::VariableId;
use crate::containers::KeyValueHeap;

/// VSIDS \[1\] activities for the search variables, stored in a [`KeyValueHeap`] so that the
/// most active variable can be retrieved in constant time.
///
/// Intuitively, the more often a variable appears in conflicts, the more "important" it is during
/// the search process.
///
/// # Bibliography
/// \[1\] M. W. Moskewicz, C. F. Madigan, Y. Zhao, L. Zhang, and S. Malik, ‘Chaff: Engineering an
/// efficient SAT solver’, in Proceedings of the 38th annual Design Automation Conference, 2001, pp.
/// 530–535.
#[derive(Debug, Clone)]
pub struct VariableActivities {
    heap: KeyValueHeap<VariableId, f64>,
    /// How much the activity of a variable is increased when it appears in a conflict.
    /// This value changes during search (see [`VariableActivities::decay_activities`]).
    increment: f64,
    /// The maximum allowed activity, if this value is reached then all of the values are
    /// divided by this value. This value is constant.
    max_threshold: f64,
    /// Whenever a conflict is found, the [`VariableActivities::increment`] is multiplied by 1 /
    /// [`VariableActivities::decay_factor`].
    /// This value is constant.
    decay_factor: f64,
}

const DEFAULT_VSIDS_INCREMENT: f64 = 1.0;
const DEFAULT_VSIDS_MAX_THRESHOLD: f64 = 1e100;
const DEFAULT_VSIDS_DECAY_FACTOR: f64 = 0.95;
const DEFAULT_VSIDS_VALUE: f64 = 0.0;

impl VariableActivities {
    /// Creates activities for the variables `0..num_variables`, all starting at `0.0`.
    pub fn new(num_variables: u32) -> Self {
        if num_variables == 0 {
            warn!("The variable activities were not provided with any variables");
        }
        let mut heap = KeyValueHeap::default();
        for id in 0..num_variables {
            heap.grow(VariableId::new(id), DEFAULT_VSIDS_VALUE);
        }
        VariableActivities {
            heap,
            increment: DEFAULT_VSIDS_INCREMENT,
            max_threshold: DEFAULT_VSIDS_MAX_THRESHOLD,
            decay_factor: DEFAULT_VSIDS_DECAY_FACTOR,
        }
    }

    /// Bumps the activity of a variable by [`VariableActivities::increment`].
    /// Used when a variable is encountered during a conflict.
    pub fn bump_activity(&mut self, variable: VariableId) {
        // Scale the activities if the values are too large.
        let activity = *self.heap.get_value(variable);
        if activity + self.increment >= self.max_threshold {
            let keys = self.heap.keys().collect::<Vec<_>>();
            for key in keys {
                let scaled = *self.heap.get_value(key) / self.max_threshold;
                self.heap.set_value_unordered(key, scaled);
            }
            self.heap.rebuild();

            // Adjust increment. It is important to adjust the increment after the above code.
            self.increment /= self.max_threshold;
        }
        self.heap.increment(variable, self.increment);
    }

    /// Decays the activities (i.e. increases the [`VariableActivities::increment`] by multiplying
    /// it with 1 / [`VariableActivities::decay_factor`]) such that future bumps are more
    /// impactful.
    pub fn decay_activities(&mut self) {
        self.increment *= 1.0 / self.decay_factor;
    }

    pub fn activity(&self, variable: VariableId) -> f64 {
        *self.heap.get_value(variable)
    }

    /// Returns the variable with the highest activity.
    pub fn most_active(&self) -> Option<VariableId> {
        self.heap.peek_max().map(|(variable, _)| *variable)
    }

    /// Returns whether the underlying heap currently satisfies the heap property.
    pub fn is_ordered(&self) -> bool {
        self.heap.is_max_heap()
    }
}

impl BranchingActivity for VariableActivities {
    fn num_variables(&self) -> usize {
        self.heap.len()
    }

    fn set_activity(&mut self, variable: VariableId, value: f64) {
        self.heap.set_value_unordered(variable, value);
    }

    fn rebuild(&mut self) {
        self.heap.rebuild();
    }
}
