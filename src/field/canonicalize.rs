// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Constant-time canonicalization ("freeze") of loosely reduced limbs.
//!
//! # Algorithm
//!
//! Input `x` is any limb vector whose represented integer lies in `[0, 2p)`.
//! A single conditional reduction is performed, unconditionally:
//!
//! 1. `d = x - p` through the mixed-radix borrow chain, using the limbs of p
//!    as per-limb subtraction constants.
//! 2. The signed carry out of the top limb is `⌊(x - p) / 2^321⌋`, which is `-1`
//!    when `x < p` and `0` when `x ≥ p`. Its low bit is the final borrow `b`.
//! 3. `mask = -b`: all-ones when the subtraction underflowed, zero otherwise.
//! 4. `out = d + (mask & p)` through the carry chain. When the add-back fires,
//!    `d` holds `x - p + 2^321` and the carry out of the top limb is exactly
//!    that `2^321`, so it is discarded.
//!
//! ```text
//! x < p :  b = 1, mask = 0xffff_ffff, out = (x - p + 2^321) + p - 2^321 = x
//! x ≥ p :  b = 0, mask = 0,           out = x - p
//! ```
//!
//! Both chains and the mask derivation run for every input; only the operand of
//! the add-back depends on data.

use super::{
  limbs::{add, and_mask, sub},
  params::{LIMB_WIDTHS, MODULUS_LIMBS, NUM_LIMBS},
};

/// Canonicalize a loosely reduced limb vector into `[0, p)` with tight limbs.
///
/// The represented integer of `limbs` must lie in `[0, 2p)`; individual limbs
/// may exceed their radix cap as long as that holds. Outside that domain the
/// result is unspecified, never a panic.
///
/// Runs in time independent of the limb values.
#[inline]
pub const fn freeze(limbs: [u32; NUM_LIMBS]) -> [u32; NUM_LIMBS] {
  let (diff, carry) = sub::<NUM_LIMBS>(&limbs, &MODULUS_LIMBS, &LIMB_WIDTHS);

  // carry ∈ {-1, 0} on valid inputs; -1 as u32 is all-ones, so bit 0 is the borrow.
  let borrow = (carry as u32) & 1;
  let mask = borrow.wrapping_neg();

  let correction = and_mask::<NUM_LIMBS>(&MODULUS_LIMBS, mask);
  let (out, _) = add::<NUM_LIMBS>(&diff, &correction, &LIMB_WIDTHS);
  out
}

/// Final borrow of `limbs - p`: 1 iff the represented value is below p.
///
/// Only meaningful for values in `[0, 2^321 + p)`; callers mask the result
/// with their own tightness check.
#[inline]
pub(super) const fn borrow_below_modulus(limbs: &[u32; NUM_LIMBS]) -> u32 {
  let (_, carry) = sub::<NUM_LIMBS>(limbs, &MODULUS_LIMBS, &LIMB_WIDTHS);
  (carry as u32) & 1
}
