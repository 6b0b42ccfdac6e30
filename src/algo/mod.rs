// SPDX-License-Identifier: MIT

//! # Algorithms module
//!
//! The `algo` module provides the sequential building blocks this crate's
//! parallel partition is assembled from. These algorithms explicitly accept
//! `Position`s (`begin`/`mid`/`end`) rather than whole ranges. For the
//! compact, range-level public API, see the `rng` module.
//!
//! NOTE: In documentation of any function that accepts position with
//! notation like `[start, end)`, if the doc talks in terms of the full
//! range, it should be considered as the range's elements from `[start,
//! end)` position only.

#[doc(hidden)]
pub mod swap_ranges;
#[doc(inline)]
pub use swap_ranges::*;

#[doc(hidden)]
pub mod rotate;
#[doc(inline)]
pub use rotate::*;

#[doc(hidden)]
pub mod partition;
#[doc(inline)]
pub use partition::*;

#[doc(hidden)]
pub mod stable_partition;
#[doc(inline)]
pub use stable_partition::*;

#[doc(hidden)]
pub mod partition_range;
#[doc(inline)]
pub use partition_range::*;

#[doc(hidden)]
pub mod merge;
#[doc(inline)]
pub use merge::*;

#[doc(hidden)]
pub mod stable_merge;
#[doc(inline)]
pub use stable_merge::*;
