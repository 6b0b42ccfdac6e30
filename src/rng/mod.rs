// SPDX-License-Identifier: MIT

//! # Range-level module
//!
//! The `rng` module is this crate's public surface: functions that accept
//! whole slices (rather than explicit positions, see the `algo` module) and
//! dispatch the partition across the global thread pool. Method-call syntax
//! over the same functions is available via `rng::partition::infix`.

#[doc(hidden)]
pub mod partition;
#[doc(inline)]
pub use partition::*;
