// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Limb layout of GF(p), p = 2^321 - 9, in twelve unsaturated `u32` limbs.
//!
//! Nothing in this module is transcribed by hand: every table is computed at
//! compile time from the three defining numbers ([`MODULUS_BITS`],
//! [`MODULUS_C`], [`NUM_LIMBS`]), so the relationship to the prime stays
//! auditable.
//!
//! # Mixed radix
//!
//! 321 bits do not split evenly into 12 limbs, so limb `i` starts at bit
//! `⌈321·i/12⌉` and the widths alternate between 27 and 26 bits:
//!
//! ```text
//! limb    0   1   2   3   4   5   6   7   8   9  10  11
//! width  27  27  27  26  27  27  27  26  27  27  27  26
//! offset  0  27  54  81 107 134 161 188 214 241 268 295
//! ```
//!
//! # The modulus in limbs
//!
//! `2^321 - 1` is every limb at its mask. `p = 2^321 - 9` is that value minus 8,
//! which only touches limb 0:
//!
//! ```text
//! MODULUS_LIMBS[0]    = 2^27 - 9
//! MODULUS_LIMBS[i>0]  = 2^width_i - 1
//! ```
//!
//! These are exactly the per-limb subtraction constants of the canonicalization
//! routine.

/// Bit length of the modulus: p = 2^MODULUS_BITS - MODULUS_C.
pub const MODULUS_BITS: usize = 321;

/// The small Solinas offset c in p = 2^321 - c.
pub const MODULUS_C: u32 = 9;

/// Number of limbs in a field element.
pub const NUM_LIMBS: usize = 12;

/// Bit offset of each limb inside the represented integer.
pub const LIMB_OFFSETS: [usize; NUM_LIMBS] = compute_limb_offsets();

/// Bit width (radix exponent) of each limb.
pub const LIMB_WIDTHS: [u32; NUM_LIMBS] = compute_limb_widths(LIMB_OFFSETS);

/// `2^width - 1` for each limb; a tight limb never exceeds its mask.
pub const LIMB_MASKS: [u32; NUM_LIMBS] = compute_limb_masks(LIMB_WIDTHS);

/// Limb decomposition of p, used as the subtraction constants of `freeze`.
pub const MODULUS_LIMBS: [u32; NUM_LIMBS] = compute_modulus_limbs(LIMB_MASKS, MODULUS_C);

// Widths must cover the modulus exactly, and every limb must leave headroom in
// a u32 for the carry of an addition of two tight limbs.
const _: () = {
  let mut total = 0usize;
  let mut i = 0;
  while i < NUM_LIMBS {
    assert!(LIMB_WIDTHS[i] >= 1 && LIMB_WIDTHS[i] <= 30, "limb width out of range");
    total += LIMB_WIDTHS[i] as usize;
    i += 1;
  }
  assert!(total == MODULUS_BITS, "limb widths must sum to the modulus bit length");
  assert!(
    LIMB_OFFSETS[NUM_LIMBS - 1] + LIMB_WIDTHS[NUM_LIMBS - 1] as usize == MODULUS_BITS,
    "top limb must end at the modulus bit length"
  );
  assert!(
    MODULUS_C >= 1 && MODULUS_C <= LIMB_MASKS[0],
    "the Solinas offset must fit in limb 0"
  );
};

/// `⌈MODULUS_BITS · i / NUM_LIMBS⌉` for each limb index.
const fn compute_limb_offsets() -> [usize; NUM_LIMBS] {
  let mut offsets = [0usize; NUM_LIMBS];
  let mut i = 0;
  while i < NUM_LIMBS {
    offsets[i] = (MODULUS_BITS * i).div_ceil(NUM_LIMBS);
    i += 1;
  }
  offsets
}

const fn compute_limb_widths(offsets: [usize; NUM_LIMBS]) -> [u32; NUM_LIMBS] {
  let mut widths = [0u32; NUM_LIMBS];
  let mut i = 0;
  while i < NUM_LIMBS {
    let end = if i + 1 < NUM_LIMBS {
      offsets[i + 1]
    } else {
      MODULUS_BITS
    };
    widths[i] = (end - offsets[i]) as u32;
    i += 1;
  }
  widths
}

const fn compute_limb_masks(widths: [u32; NUM_LIMBS]) -> [u32; NUM_LIMBS] {
  let mut masks = [0u32; NUM_LIMBS];
  let mut i = 0;
  while i < NUM_LIMBS {
    masks[i] = (1u32 << widths[i]) - 1;
    i += 1;
  }
  masks
}

/// p = (2^321 - 1) - (c - 1): all limbs at their mask, limb 0 lowered by c - 1.
const fn compute_modulus_limbs(masks: [u32; NUM_LIMBS], c: u32) -> [u32; NUM_LIMBS] {
  let mut limbs = masks;
  limbs[0] -= c - 1;
  limbs
}
