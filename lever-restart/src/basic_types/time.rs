//! Platform-agnostic time types.
//!
//! All code in this crate should use these types instead of `std::time` directly.

pub(crate) use std::time::Duration;
pub(crate) use std::time::Instant;
