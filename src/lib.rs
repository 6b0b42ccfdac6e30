// SPDX-License-Identifier: MIT

//! # par_partition
//!
//! Parallel in-place partition algorithms over random-access mutable
//! ranges. Given a mutable slice and a unary predicate, rearranges elements
//! so that all elements satisfying the predicate precede all that do not,
//! and returns the boundary position ("pivot").
//!
//! Four entry points are provided, all living in [`rng::partition`] and its
//! [`rng::infix`] method-call forms:
//! - [`rng::partition`]: unstable, throughput-optimized.
//! - [`rng::partition_deterministic`]: unstable, reproducible merge order.
//! - [`rng::stable_partition`]: stable (preserves relative order),
//!   throughput-optimized.
//! - [`rng::stable_partition_deterministic`]: stable, fully reproducible
//!   output for a fixed input and grain size.
//!
//! The `core` module defines the range trait hierarchy this crate's
//! algorithms are generic over; `algo` holds the explicit-position
//! algorithms (sequential primitives, the merge step); `exec` holds the
//! parallel execution substrate built on `rayon-core`.

#[doc(hidden)]
pub mod algo;
#[doc(hidden)]
pub mod core;
#[doc(hidden)]
pub mod exec;
#[doc(hidden)]
pub mod rng;
#[doc(hidden)]
pub mod std_impl;

#[doc(inline)]
pub use core::*;
