//! Integer width normalization for the numport runtime layer.
//!
//! All numeric code above this crate takes its integer types from here
//! instead of using raw platform integers:
//!
//! - [`ssize::SignedSize`] for every length, index and offset.
//! - [`natural::NaturalInt`] / [`natural::NaturalUInt`] for the fast
//!   native register width.
//! - [`shift`] for right shifts where sign extension vs. zero fill is a
//!   named choice at the call site.
//! - [`offset::FileOffset`] for file positions, always 64-bit.
//!
//! Each type is selected from [`numport_platform::PlatformProfile::HOST`]
//! at compile time; widths other than 32 or 64 bits fail the build.

/// Internal consistency check, active only in debug builds with the
/// `debug-full` feature.
macro_rules! assert_internal {
    ($($arg:tt)*) => {
        if cfg!(all(debug_assertions, feature = "debug-full")) {
            assert!($($arg)*);
        }
    };
}

pub mod natural;
pub mod offset;
pub mod shift;
pub mod ssize;
pub mod width;

pub use natural::{NaturalInt, NaturalUInt, NATURAL_BITS, NATURAL_MAX, NATURAL_MIN, NATURAL_UMAX};
pub use offset::{FileOffset, OFF_MAX, OFF_MIN};
pub use shift::{
    arithmetic_shift_right, arithmetic_shift_right_32, arithmetic_shift_right_64,
    logical_shift_right, logical_shift_right_32, logical_shift_right_64, ArithmeticShiftRight,
    LogicalShiftRight,
};
pub use ssize::{
    checked_signed_size, checked_unsigned_size, to_signed_size, to_unsigned_size, SignedSize,
    SSIZE_BITS, SSIZE_MAX, SSIZE_MIN,
};
