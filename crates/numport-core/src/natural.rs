//! Natural machine word.
//!
//! The natural word is as wide as `max(long, size_t)`. `long` alone is too
//! short on LLP64 targets and `size_t` alone is too short where `long` is
//! 64-bit but addresses are 32-bit.

use numport_platform::PlatformProfile;

use crate::width::{IntegerWidth, Width};

type NaturalWidth = Width<{ PlatformProfile::HOST.natural_width() }>;

/// Signed natural machine word.
pub type NaturalInt = <NaturalWidth as IntegerWidth>::Signed;

/// Unsigned natural machine word.
pub type NaturalUInt = <NaturalWidth as IntegerWidth>::Unsigned;

/// Smallest [`NaturalInt`].
pub const NATURAL_MIN: NaturalInt = <NaturalWidth as IntegerWidth>::SIGNED_MIN;

/// Largest [`NaturalInt`].
pub const NATURAL_MAX: NaturalInt = <NaturalWidth as IntegerWidth>::SIGNED_MAX;

/// Largest [`NaturalUInt`].
pub const NATURAL_UMAX: NaturalUInt = <NaturalWidth as IntegerWidth>::UNSIGNED_MAX;

/// Width of the natural word in bits; always 32 or 64.
pub const NATURAL_BITS: u32 = <NaturalWidth as IntegerWidth>::BITS;

const _: () = assert!(NATURAL_BITS == 32 || NATURAL_BITS == 64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_long;
    use std::mem::size_of;

    #[test]
    fn width_matches_profile() {
        assert_eq!(NATURAL_BITS, PlatformProfile::HOST.natural_bits());
        assert_eq!(size_of::<NaturalInt>() as u32 * 8, NATURAL_BITS);
        assert_eq!(size_of::<NaturalUInt>(), size_of::<NaturalInt>());
    }

    #[test]
    fn at_least_as_wide_as_long_and_usize() {
        assert!(size_of::<NaturalInt>() >= size_of::<c_long>());
        assert!(size_of::<NaturalInt>() >= size_of::<usize>());
    }

    #[test]
    fn bounds() {
        assert!(NATURAL_MIN < 0);
        assert_eq!(NATURAL_MAX as NaturalUInt, NATURAL_UMAX / 2);
        assert_eq!(NATURAL_UMAX.count_ones(), NATURAL_BITS);
    }
}
