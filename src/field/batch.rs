// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Canonicalize many elements at once.

use super::element::FieldElement;
use crate::utils::parallel::par_map;

/// Freeze every element of `elements`, preserving order.
///
/// Each element is handled by the constant-time [`FieldElement::freeze`];
/// with the `parallel` feature the slice is split across the rayon pool.
pub fn freeze_batch(elements: &[FieldElement]) -> Vec<FieldElement> {
  log::debug!(
    "freezing {} field elements ({})",
    elements.len(),
    if cfg!(feature = "parallel") {
      "parallel"
    } else {
      "serial"
    }
  );
  par_map(elements, |fe| fe.freeze())
}
