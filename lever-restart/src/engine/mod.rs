mod glue_averages;
mod reluctant_doubling;
pub(crate) mod restarts;
mod search_context;

pub use glue_averages::GlueAverages;
pub use reluctant_doubling::ReluctantDoubling;
pub use search_context::SearchContext;
pub use search_context::SearchMode;
