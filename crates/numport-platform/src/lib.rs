//! Native integer width profile and target data models for numport.
//!
//! Every numeric type in the numport layer is derived from a single
//! [`PlatformProfile`]: the byte widths of the platform's `long`, its
//! address-sized integer and its size-counting integer.
//!
//! - **Host profile:** [`PlatformProfile::HOST`] is resolved at compile time
//!   by matching native maxima against the 32-bit and 64-bit sentinels. A
//!   host whose widths match neither does not build.
//! - **Target profiles:** named data models of other platforms (LP64, LLP64,
//!   ILP32, or custom widths) that go through the same width checks and can
//!   be stored as `.target.toml` files.

pub mod error;
pub mod parse;
pub mod profile;
pub mod target;

pub use error::{PlatformError, Result};
pub use profile::{IntegerKind, PlatformProfile};
pub use target::{DataModel, Endianness, TargetProfile};
