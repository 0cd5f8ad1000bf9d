// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Constant-time canonicalization for GF(2^321 - 9).
//!
//! Elements are held as twelve unsaturated `u32` limbs in the mixed radix
//! 27/27/27/26 (repeated three times). Arithmetic elsewhere may leave an
//! element *loosely* reduced: its value below 2p and its limbs possibly above
//! their radix cap. [`freeze`] (or [`FieldElement::freeze`]) maps any such
//! element to the unique representative in `[0, p)` with every limb tight,
//! without any branch or memory access that depends on the value.
//!
//! ```
//! use p321_freeze::FieldElement;
//!
//! // p itself is a valid loose representation of zero.
//! assert_eq!(FieldElement::MODULUS.freeze(), FieldElement::ZERO);
//! ```
//!
//! # Modules
//!
//! - [`field`] - limb layout, the `freeze` routine and [`FieldElement`]
//! - [`errors`] - errors of the variable-time conversion surface
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(
  unused,
  future_incompatible,
  nonstandard_style,
  rust_2018_idioms,
  missing_docs
)]
#![forbid(unsafe_code)]

pub mod errors;
pub mod field;

mod utils;

pub use errors::FieldError;
pub use field::{FieldElement, freeze, freeze_batch};
