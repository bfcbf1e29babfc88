//! The bounded array container.

use numport_core::{to_unsigned_size, SignedSize, SSIZE_MAX};

use crate::error::{ArrayError, Result};

/// A sequence of at most `N` elements with a logical length.
///
/// Slot `i` is populated iff `0 <= i < len()`. The length never exceeds `N`.
///
/// Every successful [`set`](Self::set) makes `index + 1` the new length.
/// Writing past the current length jumps it forward and the skipped slots
/// count as populated, holding whatever they held before (`T::default()`
/// if never written). Writing below the current length truncates it.
#[derive(Debug)]
pub struct BoundedArray<T, const N: usize> {
    length: SignedSize,
    data: [T; N],
}

impl<T: Copy + Default, const N: usize> BoundedArray<T, N> {
    /// Capacity as a signed size.
    pub const CAPACITY: SignedSize = if N <= SSIZE_MAX as usize {
        N as SignedSize
    } else {
        SSIZE_MAX
    };

    pub(crate) fn new() -> Self {
        Self {
            length: 0,
            data: [T::default(); N],
        }
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> SignedSize {
        Self::CAPACITY
    }

    /// Number of populated slots.
    pub fn len(&self) -> SignedSize {
        self.length
    }

    /// True if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The element at `index`, or `None` if the slot is not populated.
    ///
    /// Any index is accepted, including negative ones.
    pub fn get(&self, index: SignedSize) -> Option<T> {
        if index < 0 || index >= self.length {
            return None;
        }
        self.data.get(to_unsigned_size(index)).copied()
    }

    /// Like [`get`](Self::get), reporting why the slot is unavailable.
    pub fn try_get(&self, index: SignedSize) -> Result<T> {
        self.get(index).ok_or(ArrayError::IndexNotPresent {
            index,
            length: self.length,
        })
    }

    /// Write `value` at `index` and make `index + 1` the length.
    ///
    /// Fails without mutating anything if `index` is negative or at or
    /// beyond the capacity.
    pub fn set(&mut self, index: SignedSize, value: T) -> Result<()> {
        if index < 0 {
            return Err(ArrayError::NegativeIndex { index });
        }
        if index >= Self::CAPACITY {
            return Err(ArrayError::CapacityExceeded {
                index,
                capacity: Self::CAPACITY,
            });
        }
        self.data[to_unsigned_size(index)] = value;
        self.length = index + 1;
        Ok(())
    }

    /// The populated slots.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..to_unsigned_size(self.length)]
    }

    /// Iterate over the populated slots by value.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.as_slice().iter().copied()
    }
}
