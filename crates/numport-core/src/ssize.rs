//! Signed size type.
//!
//! Lengths, indices and offsets are carried as a *signed* integer as wide as
//! the platform's `size_t`. Subtraction and loop bounds then behave without
//! unsigned wrap-around, and a negative length is a value that can be seen
//! and rejected instead of aliasing to a huge positive one. In exchange the
//! largest representable size is half the unsigned range.
//!
//! Conversions from `usize` clamp to [`SSIZE_MAX`]; conversions back clamp
//! negatives to zero. With the `debug-full` feature, debug builds assert that
//! no clamping happened.

use numport_platform::PlatformProfile;

use crate::width::{IntegerWidth, Width};

type SizeWidth = Width<{ PlatformProfile::HOST.size_width }>;

/// Signed integer as wide as the platform size type.
pub type SignedSize = <SizeWidth as IntegerWidth>::Signed;

/// Largest [`SignedSize`]: half the unsigned size domain.
pub const SSIZE_MAX: SignedSize = <SizeWidth as IntegerWidth>::SIGNED_MAX;

/// Smallest [`SignedSize`].
pub const SSIZE_MIN: SignedSize = <SizeWidth as IntegerWidth>::SIGNED_MIN;

/// Width of [`SignedSize`] in bits.
pub const SSIZE_BITS: u32 = <SizeWidth as IntegerWidth>::BITS;

const _: () = assert!(SSIZE_BITS == usize::BITS);

/// Convert an unsigned size, clamping to [`SSIZE_MAX`].
#[inline]
pub fn to_signed_size(size: usize) -> SignedSize {
    assert_internal!(
        size <= SSIZE_MAX as usize,
        "size {size} does not fit in a signed size"
    );
    if size <= SSIZE_MAX as usize {
        size as SignedSize
    } else {
        SSIZE_MAX
    }
}

/// Convert a signed size back to `usize`, clamping negatives to zero.
#[inline]
pub fn to_unsigned_size(size: SignedSize) -> usize {
    assert_internal!(size >= 0, "negative size {size}");
    if size >= 0 {
        size as usize
    } else {
        0
    }
}

/// Convert an unsigned size, or `None` if it exceeds [`SSIZE_MAX`].
#[inline]
pub fn checked_signed_size(size: usize) -> Option<SignedSize> {
    TryFrom::try_from(size).ok()
}

/// Convert a signed size to `usize`, or `None` if it is negative.
#[inline]
pub fn checked_unsigned_size(size: SignedSize) -> Option<usize> {
    TryFrom::try_from(size).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAX_AS_USIZE: usize = SSIZE_MAX as usize;

    #[test]
    fn bounds_follow_the_host_profile() {
        assert_eq!(SSIZE_MAX as i64, PlatformProfile::HOST.signed_size_max());
        assert_eq!(SSIZE_MIN as i64, PlatformProfile::HOST.signed_size_min());
        assert_eq!(MAX_AS_USIZE, usize::MAX / 2);
        assert_eq!(std::mem::size_of::<SignedSize>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn edges() {
        assert_eq!(to_signed_size(0), 0);
        assert_eq!(to_signed_size(MAX_AS_USIZE), SSIZE_MAX);
        assert_eq!(to_unsigned_size(0), 0);
        assert_eq!(to_unsigned_size(SSIZE_MAX), MAX_AS_USIZE);
        assert_eq!(checked_signed_size(MAX_AS_USIZE), Some(SSIZE_MAX));
        assert_eq!(checked_signed_size(MAX_AS_USIZE + 1), None);
        assert_eq!(checked_unsigned_size(-1), None);
        assert_eq!(checked_unsigned_size(7), Some(7));
    }

    #[cfg(not(all(debug_assertions, feature = "debug-full")))]
    #[test]
    fn clamps_without_internal_assertions() {
        assert_eq!(to_signed_size(usize::MAX), SSIZE_MAX);
        assert_eq!(to_unsigned_size(SSIZE_MIN), 0);
    }

    #[cfg(all(debug_assertions, feature = "debug-full"))]
    #[test]
    #[should_panic(expected = "does not fit in a signed size")]
    fn internal_assertion_flags_clamping() {
        to_signed_size(usize::MAX);
    }

    #[cfg(all(debug_assertions, feature = "debug-full"))]
    #[test]
    #[should_panic(expected = "negative size")]
    fn internal_assertion_flags_negative_size() {
        to_unsigned_size(-1);
    }

    proptest! {
        #[test]
        fn in_range_sizes_round_trip(u in 0..=MAX_AS_USIZE) {
            prop_assert_eq!(to_unsigned_size(to_signed_size(u)), u);
            prop_assert_eq!(checked_signed_size(u).and_then(checked_unsigned_size), Some(u));
        }

        #[test]
        fn oversized_sizes_are_rejected(u in (MAX_AS_USIZE + 1)..=usize::MAX) {
            prop_assert_eq!(checked_signed_size(u), None);
            #[cfg(not(all(debug_assertions, feature = "debug-full")))]
            prop_assert_eq!(to_signed_size(u), SSIZE_MAX);
        }

        #[test]
        fn negative_sizes_map_to_zero(s in SSIZE_MIN..0) {
            prop_assert_eq!(checked_unsigned_size(s), None);
            #[cfg(not(all(debug_assertions, feature = "debug-full")))]
            prop_assert_eq!(to_unsigned_size(s), 0);
        }
    }
}
