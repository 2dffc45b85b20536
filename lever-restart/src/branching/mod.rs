//! The branching-activity collaborator of the restart subsystem.
//!
//! The restart subsystem never decides which variable is branched on; it only overwrites the
//! activities on a [`Lever::Reset`]. The [`BranchingActivity`] trait captures exactly that
//! surface, and [`VariableActivities`] is a VSIDS-style implementation of it.
//!
//! [`Lever::Reset`]: crate::Lever::Reset
mod branching_activity;
mod variable_activities;
mod variable_id;

pub use branching_activity::BranchingActivity;
pub use variable_activities::VariableActivities;
pub use variable_id::VariableId;
