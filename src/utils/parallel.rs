// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Map `f` over `items`, in parallel when the `parallel` feature is enabled.
///
/// Output order always matches input order.
pub fn par_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
  T: Sync,
  U: Send,
  F: Fn(&T) -> U + Sync + Send,
{
  #[cfg(feature = "parallel")]
  {
    items.par_iter().map(f).collect()
  }
  #[cfg(not(feature = "parallel"))]
  {
    items.iter().map(f).collect()
  }
}
