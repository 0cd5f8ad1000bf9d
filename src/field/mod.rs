// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! GF(2^321 - 9) in twelve unsaturated 32-bit limbs, and its canonicalization.
//!
//! Arithmetic routines leave elements *loosely* reduced (value < 2p, limbs
//! possibly above their radix cap). [`freeze`] brings any such element to the
//! unique representative in `[0, p)` with tight limbs, in constant time.

pub mod params;

mod batch;
mod canonicalize;
mod element;
mod limbs;

pub use batch::freeze_batch;
pub use canonicalize::freeze;
pub use element::FieldElement;
