//! Fixed-capacity arrays with checked access.
//!
//! A [`BoundedArray`] holds at most `N` elements and is indexed by
//! [`SignedSize`](numport_core::SignedSize). Reads past the logical length
//! return `None`; writes past the capacity return
//! [`ArrayError::CapacityExceeded`]. Nothing ever touches storage outside the
//! `N` slots.
//!
//! Arrays are only handed out by the scoped entry points in [`scope`]: the
//! storage lives for a single call and the borrow cannot escape it.

pub mod bounded;
pub mod error;
pub mod scope;

pub use bounded::BoundedArray;
pub use error::{ArrayError, Result};
pub use scope::{with_array_512, with_bounded_array, Array512, ARRAY_512_CAPACITY};
