//! Right shifts with the fill behavior named at the call site.
//!
//! `>>` sign-extends or zero-fills depending on the operand type, which is
//! easy to lose track of after a cast. These primitives make the choice
//! explicit: arithmetic shifts only take signed operands and replicate the
//! sign bit, logical shifts only take unsigned operands and fill with zeros.
//!
//! The shift amount must be below the operand width. Out-of-range amounts
//! are masked to the width, as the hardware shifters do; with the
//! `debug-full` feature, debug builds assert instead.

use crate::natural::{NaturalInt, NaturalUInt};

/// Right shift that replicates the sign bit into vacated high bits.
pub trait ArithmeticShiftRight: Sized {
    /// Shift `self` right by `shift` bits, sign-extending.
    fn arithmetic_shift_right(self, shift: u32) -> Self;
}

/// Right shift that fills vacated high bits with zeros.
pub trait LogicalShiftRight: Sized {
    /// Shift `self` right by `shift` bits, zero-filling.
    fn logical_shift_right(self, shift: u32) -> Self;
}

macro_rules! impl_shift_right {
    ($trait_name:ident, $method:ident, $t:ty) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, shift: u32) -> $t {
                assert_internal!(
                    shift < <$t>::BITS,
                    "shift amount {shift} out of range for a {}-bit operand",
                    <$t>::BITS
                );
                self.wrapping_shr(shift)
            }
        }
    };
}

impl_shift_right!(ArithmeticShiftRight, arithmetic_shift_right, i32);
impl_shift_right!(ArithmeticShiftRight, arithmetic_shift_right, i64);
impl_shift_right!(ArithmeticShiftRight, arithmetic_shift_right, isize);

impl_shift_right!(LogicalShiftRight, logical_shift_right, u32);
impl_shift_right!(LogicalShiftRight, logical_shift_right, u64);
impl_shift_right!(LogicalShiftRight, logical_shift_right, usize);

/// Arithmetic right shift of a natural word.
#[inline]
pub fn arithmetic_shift_right(value: NaturalInt, shift: u32) -> NaturalInt {
    value.arithmetic_shift_right(shift)
}

/// Logical right shift of an unsigned natural word.
#[inline]
pub fn logical_shift_right(value: NaturalUInt, shift: u32) -> NaturalUInt {
    value.logical_shift_right(shift)
}

/// Arithmetic right shift of a 32-bit integer.
#[inline]
pub fn arithmetic_shift_right_32(value: i32, shift: u32) -> i32 {
    value.arithmetic_shift_right(shift)
}

/// Logical right shift of a 32-bit integer.
#[inline]
pub fn logical_shift_right_32(value: u32, shift: u32) -> u32 {
    value.logical_shift_right(shift)
}

/// Arithmetic right shift of a 64-bit integer.
#[inline]
pub fn arithmetic_shift_right_64(value: i64, shift: u32) -> i64 {
    value.arithmetic_shift_right(shift)
}

/// Logical right shift of a 64-bit integer.
#[inline]
pub fn logical_shift_right_64(value: u64, shift: u32) -> u64 {
    value.logical_shift_right(shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::{NATURAL_BITS, NATURAL_MIN, NATURAL_UMAX};

    #[test]
    fn shifts_32() {
        assert_eq!(arithmetic_shift_right_32(-8, 1), -4);
        assert_eq!(logical_shift_right_32(0xFFFF_FFFF, 1), 0x7FFF_FFFF);
        assert_eq!(arithmetic_shift_right_32(i32::MIN, 31), -1);
        assert_eq!(logical_shift_right_32(0x8000_0000, 31), 1);
        assert_eq!(arithmetic_shift_right_32(0x40, 3), 0x8);
    }

    #[test]
    fn shifts_64() {
        assert_eq!(arithmetic_shift_right_64(-8, 1), -4);
        assert_eq!(logical_shift_right_64(u64::MAX, 1), 0x7FFF_FFFF_FFFF_FFFF);
        assert_eq!(arithmetic_shift_right_64(i64::MIN, 63), -1);
        assert_eq!(logical_shift_right_64(1 << 63, 63), 1);
    }

    #[test]
    fn shifts_native() {
        assert_eq!(arithmetic_shift_right(-8, 1), -4);
        assert_eq!(arithmetic_shift_right(NATURAL_MIN, NATURAL_BITS - 1), -1);
        assert_eq!(logical_shift_right(NATURAL_UMAX, NATURAL_BITS - 1), 1);
        assert_eq!(logical_shift_right(NATURAL_UMAX, 1), NATURAL_UMAX / 2);
    }

    #[test]
    fn same_bits_differ_by_fill() {
        let bits: u32 = 0xF000_0000;
        let arithmetic = arithmetic_shift_right_32(bits as i32, 4) as u32;
        let logical = logical_shift_right_32(bits, 4);
        assert_eq!(arithmetic, 0xFF00_0000);
        assert_eq!(logical, 0x0F00_0000);
    }

    #[test]
    fn zero_shift_is_identity() {
        assert_eq!(arithmetic_shift_right_32(-123, 0), -123);
        assert_eq!(logical_shift_right_64(42, 0), 42);
    }

    #[test]
    fn pointer_sized_shifts() {
        assert_eq!((-16isize).arithmetic_shift_right(2), -4);
        assert_eq!(usize::MAX.logical_shift_right(usize::BITS - 1), 1);
    }
}
