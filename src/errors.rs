// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! This module defines errors returned by the library.
use thiserror::Error;

/// Errors returned by the variable-time conversion surface.
///
/// `freeze` itself is total over its precondition domain and never returns one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FieldError {
  /// returned when an integer is too large to be held as a loosely reduced element (>= 2p)
  #[error("ValueOutOfRange: {reason}")]
  ValueOutOfRange {
    /// reason for the failure
    reason: String,
  },
  /// returned when a strict conversion is given a value that is not canonical (>= p)
  #[error("NonCanonical: {reason}")]
  NonCanonical {
    /// reason for the failure
    reason: String,
  },
}
