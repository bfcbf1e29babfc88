//! Native integer width profile.
//!
//! The profile records, in bytes, how wide the platform's `long`, its
//! address-sized integer and its size-counting integer are. Widths are never
//! measured directly: each kind's maximum is compared against the canonical
//! 32-bit and 64-bit maxima and the matching sentinel decides the width.
//! Anything else is an unsupported platform.

use std::ffi::c_long;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// The native integer kinds a profile records a width for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegerKind {
    /// The C `long` of the platform ABI.
    Long,
    /// The signed address-sized integer (`intptr_t`).
    Address,
    /// The unsigned size-counting integer (`size_t`).
    Size,
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerKind::Long => write!(f, "long"),
            IntegerKind::Address => write!(f, "intptr"),
            IntegerKind::Size => write!(f, "size"),
        }
    }
}

/// Width in bytes of a signed integer whose maximum is `max`.
///
/// Returns `None` unless `max` is exactly `i32::MAX` or `i64::MAX`.
pub const fn width_from_signed_max(max: i128) -> Option<u32> {
    if max == i64::MAX as i128 {
        Some(8)
    } else if max == i32::MAX as i128 {
        Some(4)
    } else {
        None
    }
}

/// Width in bytes of an unsigned integer whose maximum is `max`.
///
/// Returns `None` unless `max` is exactly `u32::MAX` or `u64::MAX`.
pub const fn width_from_unsigned_max(max: u128) -> Option<u32> {
    if max == u64::MAX as u128 {
        Some(8)
    } else if max == u32::MAX as u128 {
        Some(4)
    } else {
        None
    }
}

/// Maximum of a signed two's complement integer of `bytes` bytes.
const fn signed_max_of_width(bytes: u32) -> Option<i128> {
    match bytes {
        1..=16 => Some(((1u128 << (bytes * 8 - 1)) - 1) as i128),
        _ => None,
    }
}

// Zero marks an unmatched sentinel; the assertions below turn it into a
// build failure.
const fn or_unsupported(width: Option<u32>) -> u32 {
    match width {
        Some(w) => w,
        None => 0,
    }
}

/// Byte widths of the native integer kinds of one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformProfile {
    /// Width of `long` in bytes.
    pub long_width: u32,
    /// Width of the address-sized integer in bytes.
    pub address_width: u32,
    /// Width of the size-counting integer in bytes.
    pub size_width: u32,
}

impl PlatformProfile {
    /// The profile of the platform this crate is compiled for.
    pub const HOST: Self = Self {
        long_width: or_unsupported(width_from_signed_max(c_long::MAX as i128)),
        address_width: or_unsupported(width_from_signed_max(isize::MAX as i128)),
        size_width: or_unsupported(width_from_unsigned_max(usize::MAX as u128)),
    };

    /// Resolve a profile from the maxima of the three integer kinds.
    pub fn resolve(long_max: i128, intptr_max: i128, size_max: u128) -> Result<Self> {
        let long_width = width_from_signed_max(long_max).ok_or(PlatformError::UnsupportedMax {
            kind: IntegerKind::Long,
            max: long_max,
        })?;
        let address_width =
            width_from_signed_max(intptr_max).ok_or(PlatformError::UnsupportedMax {
                kind: IntegerKind::Address,
                max: intptr_max,
            })?;
        let size_width =
            width_from_unsigned_max(size_max).ok_or(PlatformError::UnsupportedUnsignedMax {
                kind: IntegerKind::Size,
                max: size_max,
            })?;
        Ok(Self {
            long_width,
            address_width,
            size_width,
        })
    }

    /// Build a profile from declared byte widths.
    ///
    /// Each width is turned back into the maximum it implies and run through
    /// the same sentinel match as [`PlatformProfile::resolve`].
    pub fn from_widths(long_width: u32, address_width: u32, size_width: u32) -> Result<Self> {
        Ok(Self {
            long_width: checked_width(IntegerKind::Long, long_width)?,
            address_width: checked_width(IntegerKind::Address, address_width)?,
            size_width: checked_width(IntegerKind::Size, size_width)?,
        })
    }

    /// Re-check every width of an already constructed profile.
    pub fn check(&self) -> Result<()> {
        match self.width_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every width of the profile that fails the sentinel match, in
    /// long, intptr, size order.
    pub fn width_errors(&self) -> Vec<PlatformError> {
        [
            (IntegerKind::Long, self.long_width),
            (IntegerKind::Address, self.address_width),
            (IntegerKind::Size, self.size_width),
        ]
        .into_iter()
        .filter_map(|(kind, bytes)| checked_width(kind, bytes).err())
        .collect()
    }

    /// Width of `long` in bits.
    pub const fn long_bits(&self) -> u32 {
        self.long_width * 8
    }

    /// Width of the address-sized integer in bits.
    pub const fn address_bits(&self) -> u32 {
        self.address_width * 8
    }

    /// Width of the size-counting integer in bits.
    pub const fn size_bits(&self) -> u32 {
        self.size_width * 8
    }

    /// Width of the natural machine word: the wider of `long` and size.
    ///
    /// `long` alone is too narrow on LLP64 targets; size alone is too narrow
    /// on targets with 64-bit `long` and 32-bit addresses.
    pub const fn natural_width(&self) -> u32 {
        if self.long_width > self.size_width {
            self.long_width
        } else {
            self.size_width
        }
    }

    /// Width of the natural machine word in bits.
    pub const fn natural_bits(&self) -> u32 {
        self.natural_width() * 8
    }

    /// Width of a function pointer in bytes.
    pub const fn function_pointer_width(&self) -> u32 {
        self.address_width
    }

    /// Largest value of the signed size type on this profile.
    ///
    /// Half the unsigned size domain, rounded down.
    pub const fn signed_size_max(&self) -> i64 {
        if self.size_width == 8 {
            i64::MAX
        } else {
            i32::MAX as i64
        }
    }

    /// Smallest value of the signed size type on this profile.
    pub const fn signed_size_min(&self) -> i64 {
        if self.size_width == 8 {
            i64::MIN
        } else {
            i32::MIN as i64
        }
    }

    /// Largest value of the unsigned size type on this profile.
    pub const fn unsigned_size_max(&self) -> u64 {
        if self.size_width == 8 {
            u64::MAX
        } else {
            u32::MAX as u64
        }
    }

    /// Round `bytes` up to a multiple of the address width.
    ///
    /// Returns `None` if the rounded value does not fit in a `u64`, or if the
    /// profile has a zero address width.
    pub fn align_up_to_pointer(&self, bytes: u64) -> Option<u64> {
        let word = u64::from(self.address_width);
        if word == 0 {
            return None;
        }
        bytes.div_ceil(word).checked_mul(word)
    }
}

impl fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "long={}B intptr={}B size={}B",
            self.long_width, self.address_width, self.size_width
        )
    }
}

fn checked_width(kind: IntegerKind, bytes: u32) -> Result<u32> {
    signed_max_of_width(bytes)
        .and_then(width_from_signed_max)
        .ok_or(PlatformError::UnsupportedWidth { kind, bytes })
}

const _: () = assert!(
    PlatformProfile::HOST.long_width != 0,
    "size of a `long` must be 32 or 64 bits"
);
const _: () = assert!(
    PlatformProfile::HOST.address_width != 0,
    "platform must be 32 or 64 bits"
);
const _: () = assert!(
    PlatformProfile::HOST.size_width != 0,
    "size of a `size_t` must be 32 or 64 bits"
);
