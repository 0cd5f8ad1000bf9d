// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! `FieldElement`: twelve unsaturated limbs representing a value of GF(2^321 - 9).

use super::{
  canonicalize::{borrow_below_modulus, freeze},
  limbs::excess_bits,
  params::{LIMB_MASKS, LIMB_OFFSETS, LIMB_WIDTHS, MODULUS_BITS, MODULUS_C, MODULUS_LIMBS, NUM_LIMBS},
};
use crate::errors::FieldError;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// An element of GF(p), p = 2^321 - 9, as twelve mixed-radix `u32` limbs.
///
/// Limbs are little-endian: `limbs[0]` holds bits 0..27. An element produced by
/// arithmetic is only *loosely* reduced (value < 2p, limbs possibly above their
/// radix cap); [`FieldElement::freeze`] returns the canonical form required
/// before comparison or serialization.
///
/// The derived `PartialEq` compares representations, not field values. Use
/// [`ConstantTimeEq`] to compare values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NUM_LIMBS]);

impl FieldElement {
  /// The additive identity.
  pub const ZERO: FieldElement = FieldElement([0; NUM_LIMBS]);

  /// The multiplicative identity.
  pub const ONE: FieldElement = {
    let mut limbs = [0u32; NUM_LIMBS];
    limbs[0] = 1;
    FieldElement(limbs)
  };

  /// The (non-canonical) representation of p itself; freezes to zero.
  pub const MODULUS: FieldElement = FieldElement(MODULUS_LIMBS);

  /// Wrap raw limbs without any check.
  ///
  /// This is the boundary with arithmetic routines, which are responsible for
  /// keeping the represented value below 2p.
  #[inline]
  pub const fn from_limbs(limbs: [u32; NUM_LIMBS]) -> Self {
    Self(limbs)
  }

  /// Borrow the raw limbs.
  #[inline]
  pub const fn to_limbs(&self) -> &[u32; NUM_LIMBS] {
    &self.0
  }

  /// Consume the element and return its raw limbs.
  #[inline]
  pub const fn into_limbs(self) -> [u32; NUM_LIMBS] {
    self.0
  }

  /// Return the canonical representative: value in `[0, p)`, every limb tight.
  ///
  /// Requires the represented value to be below 2p. Constant time.
  #[inline]
  pub const fn freeze(self) -> Self {
    Self(freeze(self.0))
  }

  /// Whether this representation is already canonical.
  ///
  /// True iff every limb is below its radix cap and the value is below p.
  /// Constant time.
  pub fn is_canonical(&self) -> Choice {
    let tight = excess_bits(&self.0, &LIMB_WIDTHS).ct_eq(&0);
    let below_p = Choice::from(borrow_below_modulus(&self.0) as u8);
    tight & below_p
  }

  /// Accept `limbs` only if they are already canonical. Constant time.
  pub fn from_canonical_limbs(limbs: [u32; NUM_LIMBS]) -> CtOption<Self> {
    let fe = Self(limbs);
    let is_canonical = fe.is_canonical();
    CtOption::new(fe, is_canonical)
  }

  /// The modulus p = 2^321 - 9.
  pub fn modulus() -> BigUint {
    (BigUint::one() << MODULUS_BITS) - MODULUS_C
  }

  /// The integer represented by the limbs, without reduction.
  ///
  /// Variable time.
  pub fn to_biguint(&self) -> BigUint {
    self
      .0
      .iter()
      .zip(LIMB_OFFSETS.iter())
      .fold(BigUint::zero(), |acc, (limb, offset)| {
        acc + (BigUint::from(*limb) << *offset)
      })
  }

  /// Split an integer in `[0, 2p)` into limbs.
  ///
  /// Limbs 0..11 come out tight; bits at and above 2^321 stay in the top limb,
  /// which is then above its cap. Such a value is a valid input to
  /// [`FieldElement::freeze`]. Variable time.
  pub fn from_biguint(value: &BigUint) -> Result<Self, FieldError> {
    let bound = Self::modulus() << 1usize;
    if value >= &bound {
      return Err(FieldError::ValueOutOfRange {
        reason: format!("value has {} bits and is not below 2p", value.bits()),
      });
    }

    let mut limbs = [0u32; NUM_LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
      let shifted = value >> LIMB_OFFSETS[i];
      let chunk = if i + 1 < NUM_LIMBS {
        shifted & BigUint::from(LIMB_MASKS[i])
      } else {
        shifted
      };
      *limb = chunk.to_u32().ok_or_else(|| FieldError::ValueOutOfRange {
        reason: format!("limb {i} does not fit in 32 bits"),
      })?;
    }
    Ok(Self(limbs))
  }

  /// Split an integer in `[0, p)` into canonical limbs. Variable time.
  pub fn from_canonical_biguint(value: &BigUint) -> Result<Self, FieldError> {
    if value >= &Self::modulus() {
      return Err(FieldError::NonCanonical {
        reason: format!("value has {} bits and is not below p", value.bits()),
      });
    }
    Self::from_biguint(value)
  }
}

impl From<[u32; NUM_LIMBS]> for FieldElement {
  fn from(limbs: [u32; NUM_LIMBS]) -> Self {
    Self::from_limbs(limbs)
  }
}

impl From<FieldElement> for [u32; NUM_LIMBS] {
  fn from(fe: FieldElement) -> Self {
    fe.into_limbs()
  }
}

impl ConditionallySelectable for FieldElement {
  fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
    let mut limbs = [0u32; NUM_LIMBS];
    for (out, (x, y)) in limbs.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
      *out = u32::conditional_select(x, y, choice);
    }
    Self(limbs)
  }
}

/// Compares field values: both sides are frozen first, so loose and canonical
/// representations of the same value are equal.
impl ConstantTimeEq for FieldElement {
  fn ct_eq(&self, other: &Self) -> Choice {
    let a = self.freeze();
    let b = other.freeze();
    a.0[..].ct_eq(&b.0[..])
  }
}
