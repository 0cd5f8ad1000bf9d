// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Helpers that are not specific to the field.

/// Parallel utilities for processing slices using Rayon. The parallelization is controlled by the "parallel" feature.
pub mod parallel;
