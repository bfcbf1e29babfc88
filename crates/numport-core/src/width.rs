//! Mapping from a byte width to the matching primitive integer pair.
//!
//! Only widths of 4 and 8 bytes implement [`IntegerWidth`], so naming
//! `Width<N>` for any other `N` in a type position is a compile error.

/// Marker for an integer width of `BYTES` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Width<const BYTES: u32>;

/// The signed/unsigned integer pair of a supported width.
pub trait IntegerWidth {
    /// Signed integer of this width.
    type Signed: Copy;
    /// Unsigned integer of this width.
    type Unsigned: Copy;
    /// Width in bits.
    const BITS: u32;
    /// Smallest signed value.
    const SIGNED_MIN: Self::Signed;
    /// Largest signed value.
    const SIGNED_MAX: Self::Signed;
    /// Largest unsigned value.
    const UNSIGNED_MAX: Self::Unsigned;
}

macro_rules! impl_integer_width {
    ($bytes:literal, $signed:ty, $unsigned:ty) => {
        impl IntegerWidth for Width<$bytes> {
            type Signed = $signed;
            type Unsigned = $unsigned;
            const BITS: u32 = <$unsigned>::BITS;
            const SIGNED_MIN: $signed = <$signed>::MIN;
            const SIGNED_MAX: $signed = <$signed>::MAX;
            const UNSIGNED_MAX: $unsigned = <$unsigned>::MAX;
        }
    };
}

impl_integer_width!(4, i32, u32);
impl_integer_width!(8, i64, u64);
