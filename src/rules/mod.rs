// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Decision rules.
//!
//! The gate decides whether the accumulated changes justify an automatic
//! commit and tag.

mod gate;

pub use gate::{Facts, Gate};
