// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Boundary validation helpers.
//!
//! Every engine operation runs its checks through these functions before it
//! hands anything to a backend.

use crate::error::ParamError;

/// Requires `actual == expected`.
#[inline]
pub fn check_size(name: &'static str, actual: usize, expected: usize) -> Result<(), ParamError> {
    if actual != expected {
        return Err(ParamError::InvalidSize {
            name,
            expected,
            actual,
        });
    }

    Ok(())
}

/// Requires `actual >= min`.
#[inline]
pub fn check_size_min(name: &'static str, actual: usize, min: usize) -> Result<(), ParamError> {
    if actual < min {
        return Err(ParamError::TooShort { name, min, actual });
    }

    Ok(())
}

/// Requires `actual <= max`.
#[inline]
pub fn check_size_max(name: &'static str, actual: usize, max: usize) -> Result<(), ParamError> {
    if actual > max {
        return Err(ParamError::TooLong { name, max, actual });
    }

    Ok(())
}

/// Requires `min <= actual <= max`.
#[inline]
pub fn check_in_range(
    name: &'static str,
    actual: usize,
    min: usize,
    max: usize,
) -> Result<(), ParamError> {
    if actual < min || actual > max {
        return Err(ParamError::OutOfRange {
            name,
            min,
            max,
            actual,
        });
    }

    Ok(())
}
