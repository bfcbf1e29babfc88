//! Scoped acquisition of bounded arrays.
//!
//! Storage is allocated on the caller's stack for the duration of one call
//! and handed to a closure by `&mut`. The closure's result cannot borrow from
//! the array, so the handle is gone once the call returns, on every path.

use crate::bounded::BoundedArray;

/// Capacity of the standard `u32` array.
pub const ARRAY_512_CAPACITY: usize = 512;

/// The standard 512-slot array of `u32`.
pub type Array512 = BoundedArray<u32, ARRAY_512_CAPACITY>;

/// Run `f` with a fresh, empty `BoundedArray<T, N>`.
///
/// Unpopulated slots start out as `T::default()`.
pub fn with_bounded_array<T, const N: usize, R>(f: impl FnOnce(&mut BoundedArray<T, N>) -> R) -> R
where
    T: Copy + Default,
{
    let mut array = BoundedArray::new();
    f(&mut array)
}

/// Run `f` with a fresh, empty [`Array512`].
pub fn with_array_512<R>(f: impl FnOnce(&mut Array512) -> R) -> R {
    with_bounded_array::<u32, ARRAY_512_CAPACITY, R>(f)
}
