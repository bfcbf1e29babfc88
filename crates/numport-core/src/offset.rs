//! File offsets.
//!
//! File positions are always 64-bit, independent of the platform profile,
//! so large files stay addressable on 32-bit targets.

use crate::ssize::SignedSize;

/// Signed 64-bit file offset.
pub type FileOffset = i64;

/// Largest [`FileOffset`].
pub const OFF_MAX: FileOffset = i64::MAX;

/// Smallest [`FileOffset`].
pub const OFF_MIN: FileOffset = i64::MIN;

/// Widen a signed size to a file offset. Never loses information.
#[inline]
pub fn offset_from_signed_size(size: SignedSize) -> FileOffset {
    FileOffset::from(size)
}

/// Narrow a file offset to a signed size, or `None` if it does not fit.
#[inline]
pub fn signed_size_from_offset(offset: FileOffset) -> Option<SignedSize> {
    TryFrom::try_from(offset).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssize::{SSIZE_MAX, SSIZE_MIN};

    #[test]
    fn widening_is_lossless() {
        assert_eq!(offset_from_signed_size(SSIZE_MAX), SSIZE_MAX as i64);
        assert_eq!(offset_from_signed_size(SSIZE_MIN), SSIZE_MIN as i64);
        assert_eq!(offset_from_signed_size(-1), -1);
    }

    #[test]
    fn narrowing_checks_range() {
        assert_eq!(signed_size_from_offset(0), Some(0));
        assert_eq!(signed_size_from_offset(SSIZE_MAX as i64), Some(SSIZE_MAX));
        if (SSIZE_MAX as i64) < OFF_MAX {
            assert_eq!(signed_size_from_offset(OFF_MAX), None);
            assert_eq!(signed_size_from_offset(OFF_MIN), None);
        }
    }
}
