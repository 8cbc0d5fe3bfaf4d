#[cfg(not(feature = "debug-checks"))]
pub const SCHEDULER_ASSERT_LEVEL_DEFINITION: u8 = SCHEDULER_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const SCHEDULER_ASSERT_LEVEL_DEFINITION: u8 = SCHEDULER_ASSERT_ADVANCED;

pub const SCHEDULER_ASSERT_SIMPLE: u8 = 1;
pub const SCHEDULER_ASSERT_MODERATE: u8 = 2;
pub const SCHEDULER_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
