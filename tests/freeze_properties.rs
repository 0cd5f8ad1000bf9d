// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Canonicalization properties over the public API, checked against `num-bigint`.

use num_bigint::BigUint;
use p321_freeze::{
  FieldElement, FieldError, freeze, freeze_batch,
  field::params::{LIMB_MASKS, LIMB_WIDTHS, MODULUS_LIMBS, NUM_LIMBS},
};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use subtle::ConstantTimeEq;

fn p() -> BigUint {
  FieldElement::modulus()
}

fn random_below(rng: &mut StdRng, bound: &BigUint) -> BigUint {
  let words: Vec<u32> = (0..11).map(|_| rng.next_u32()).collect();
  BigUint::from_slice(&words) % bound
}

fn element(v: &BigUint) -> FieldElement {
  FieldElement::from_biguint(v).unwrap()
}

fn assert_tight(limbs: &[u32; NUM_LIMBS]) {
  for (i, (limb, width)) in limbs.iter().zip(LIMB_WIDTHS.iter()).enumerate() {
    assert_eq!(limb >> width, 0, "limb {i} above its {width}-bit cap");
  }
}

#[test]
fn modulus_limbs_freeze_to_zero() {
  let mut limbs = [0u32; NUM_LIMBS];
  limbs[0] = (1 << 27) - 9;
  for i in 1..NUM_LIMBS {
    limbs[i] = (1 << LIMB_WIDTHS[i]) - 1;
  }
  assert_eq!(limbs, MODULUS_LIMBS);
  assert_eq!(freeze(limbs), [0u32; NUM_LIMBS]);
}

#[test]
fn boundary_values() {
  let one = BigUint::from(1u32);
  assert_eq!(freeze([0; NUM_LIMBS]), [0; NUM_LIMBS]);
  assert_eq!(element(&(p() - &one)).freeze().to_biguint(), p() - &one);
  assert_eq!(element(&p()).freeze(), FieldElement::ZERO);
  assert_eq!(
    element(&((p() << 1usize) - &one)).freeze().to_biguint(),
    p() - &one
  );
}

#[test]
fn congruence_range_and_idempotence() {
  let mut rng = StdRng::seed_from_u64(0x321);
  let two_p = p() << 1usize;
  for _ in 0..5000 {
    let v = random_below(&mut rng, &two_p);
    let out = freeze(element(&v).into_limbs());
    let fe = FieldElement::from_limbs(out);
    assert_eq!(fe.to_biguint(), &v % p());
    assert!(fe.to_biguint() < p());
    assert_tight(&out);
    assert_eq!(freeze(out), out);
  }
}

#[test]
fn values_near_the_edges() {
  // Within a few units of p, 2^321 and 2p, where borrows ripple through every limb.
  let two_p = p() << 1usize;
  let pivots = [p(), BigUint::from(1u32) << 321usize, two_p.clone()];
  for pivot in pivots.iter() {
    for delta in 1u32..=32 {
      for v in [pivot - delta, pivot + delta] {
        if v >= two_p {
          continue;
        }
        let frozen = element(&v).freeze();
        assert_eq!(frozen.to_biguint(), &v % p(), "v = {v}");
        assert_tight(frozen.to_limbs());
      }
    }
  }
  for small in 0u32..32 {
    let v = BigUint::from(small);
    assert_eq!(element(&v).freeze().to_biguint(), v);
  }
}

#[test]
fn loose_low_limbs() {
  // Every low limb raised above its cap by borrowing from the next one.
  let mut rng = StdRng::seed_from_u64(99);
  let two_p = p() << 1usize;
  for _ in 0..500 {
    let v = random_below(&mut rng, &two_p);
    let mut limbs = element(&v).into_limbs();
    for i in 0..NUM_LIMBS - 1 {
      if limbs[i + 1] > 0 && limbs[i] <= LIMB_MASKS[i] {
        limbs[i + 1] -= 1;
        limbs[i] += 1 << LIMB_WIDTHS[i];
      }
    }
    let loose = FieldElement::from_limbs(limbs);
    assert_eq!(loose.to_biguint(), v);
    let frozen = loose.freeze();
    assert_eq!(frozen.to_biguint(), &v % p());
    assert!(bool::from(frozen.is_canonical()));
  }
}

#[test]
fn several_bits_of_slack_per_limb() {
  // Low limbs drawn with up to 4 bits above their cap, top limb with up to 1,
  // keeping only representations whose value is below 2p.
  let mut rng = StdRng::seed_from_u64(0xdead_321);
  let two_p = p() << 1usize;
  let mut checked = 0;
  while checked < 2000 {
    let mut limbs = [0u32; NUM_LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
      let slack = if i + 1 < NUM_LIMBS { 4 } else { 1 };
      *limb = rng.next_u32() & ((1u32 << (LIMB_WIDTHS[i] + slack)) - 1);
    }
    let loose = FieldElement::from_limbs(limbs);
    let v = loose.to_biguint();
    if v >= two_p {
      continue;
    }
    let out = freeze(limbs);
    assert_eq!(FieldElement::from_limbs(out).to_biguint(), &v % p(), "limbs = {limbs:x?}");
    assert_tight(&out);
    checked += 1;
  }
}

#[test]
fn canonical_check_and_equality() {
  let mut rng = StdRng::seed_from_u64(5);
  for _ in 0..200 {
    let v = random_below(&mut rng, &p());
    let canonical = FieldElement::from_canonical_biguint(&v).unwrap();
    assert!(bool::from(canonical.is_canonical()));
    let shifted = element(&(&v + p()));
    assert!(!bool::from(shifted.is_canonical()));
    assert!(bool::from(shifted.ct_eq(&canonical)));
  }
  assert_eq!(
    FieldElement::from_canonical_biguint(&p()),
    Err(FieldError::NonCanonical {
      reason: "value has 321 bits and is not below p".to_string()
    })
  );
}

#[test]
fn batch_agrees_with_single() {
  let mut rng = StdRng::seed_from_u64(2024);
  let two_p = p() << 1usize;
  let inputs: Vec<FieldElement> = (0..1000)
    .map(|_| element(&random_below(&mut rng, &two_p)))
    .collect();
  let outputs = freeze_batch(&inputs);
  for (input, output) in inputs.iter().zip(outputs.iter()) {
    assert_eq!(output.to_biguint(), input.to_biguint() % p());
  }
}
