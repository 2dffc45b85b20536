//! Leveled assertions used throughout the crate.
//!
//! The level is raised in tests and under the `debug-checks` feature; checks above the active
//! level compile to nothing observable.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const LEVER_ASSERT_LEVEL_DEFINITION: u8 = LEVER_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const LEVER_ASSERT_LEVEL_DEFINITION: u8 = LEVER_ASSERT_ADVANCED;

pub const LEVER_ASSERT_SIMPLE: u8 = 1;
pub const LEVER_ASSERT_MODERATE: u8 = 2;
pub const LEVER_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! lever_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LEVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEVER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! lever_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LEVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEVER_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! lever_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::LEVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEVER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! lever_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::LEVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEVER_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
