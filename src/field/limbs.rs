// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Carry and borrow chains over unsaturated, mixed-radix limbs.
//!
//! Unlike a saturated representation, where a limb fills its machine word and
//! the carry is the word overflow, each limb here holds `width` bits of a
//! `u32`. The chain result of limb `i` is reduced to `width_i` bits and the
//! excess, shifted down by `width_i`, flows into limb `i + 1`.
//!
//! The subtraction chain carries a *signed* value: `-1` is a borrow, `0` is
//! nothing, and a positive value is the overflow of a loose input limb that
//! exceeded its radix cap. Arithmetic right shift of an `i64` yields all three
//! without a branch.
//!
//! Every function here is straight-line over a compile-time number of limbs;
//! no branch or index depends on limb values.

/// `x - y + carry` on a single limb of the given width.
///
/// Returns the low `width` bits and the signed carry into the next limb.
#[inline(always)]
pub(super) const fn sub_limb(x: u32, y: u32, carry: i64, width: u32) -> (u32, i64) {
  let t = x as i64 - y as i64 + carry;
  ((t as u32) & low_mask(width), t >> width)
}

/// `x + y + carry` on a single limb of the given width.
///
/// Returns the low `width` bits and the carry into the next limb.
#[inline(always)]
pub(super) const fn add_limb(x: u32, y: u32, carry: u32, width: u32) -> (u32, u32) {
  let t = x as u64 + y as u64 + carry as u64;
  ((t as u32) & low_mask(width), (t >> width) as u32)
}

/// Subtract N-limb `b` from N-limb `a` through the mixed radix.
///
/// Returns the N normalized limbs and the signed carry out of the top limb,
/// which is `⌊(a - b) / 2^total_width⌋`. For values with `|a - b| < 2^total_width`
/// that is `-1` on underflow and `0` otherwise.
#[inline(always)]
pub(super) const fn sub<const N: usize>(
  a: &[u32; N],
  b: &[u32; N],
  widths: &[u32; N],
) -> ([u32; N], i64) {
  let mut result = [0u32; N];
  let mut carry = 0i64;
  let mut i = 0;
  while i < N {
    let (limb, c) = sub_limb(a[i], b[i], carry, widths[i]);
    result[i] = limb;
    carry = c;
    i += 1;
  }
  (result, carry)
}

/// Add N-limb `b` to N-limb `a` through the mixed radix.
///
/// Returns the N normalized limbs and the carry out of the top limb.
#[inline(always)]
pub(super) const fn add<const N: usize>(
  a: &[u32; N],
  b: &[u32; N],
  widths: &[u32; N],
) -> ([u32; N], u32) {
  let mut result = [0u32; N];
  let mut carry = 0u32;
  let mut i = 0;
  while i < N {
    let (limb, c) = add_limb(a[i], b[i], carry, widths[i]);
    result[i] = limb;
    carry = c;
    i += 1;
  }
  (result, carry)
}

/// `mask & limbs[i]` for every limb.
#[inline(always)]
pub(super) const fn and_mask<const N: usize>(limbs: &[u32; N], mask: u32) -> [u32; N] {
  let mut result = [0u32; N];
  let mut i = 0;
  while i < N {
    result[i] = limbs[i] & mask;
    i += 1;
  }
  result
}

/// OR of the bits of each limb that lie above its width; zero iff all limbs are tight.
#[inline(always)]
pub(super) const fn excess_bits<const N: usize>(limbs: &[u32; N], widths: &[u32; N]) -> u32 {
  let mut acc = 0u32;
  let mut i = 0;
  while i < N {
    acc |= limbs[i] >> widths[i];
    i += 1;
  }
  acc
}

#[inline(always)]
const fn low_mask(width: u32) -> u32 {
  (1u32 << width) - 1
}
