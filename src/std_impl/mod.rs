// SPDX-License-Identifier: MIT

pub mod slice_impl;
