// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types shared by every engine.

use thiserror::Error;

/// A caller passed a parameter the primitive cannot accept.
///
/// These are programmer errors. They are always detected before the primitive
/// is invoked and never overlap with cryptographic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Parameter must have an exact length.
    #[error("invalid {name} size: expected {expected} bytes, got {actual}")]
    InvalidSize {
        /// Parameter name.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Parameter is shorter than the minimum length.
    #[error("{name} too short: expected at least {min} bytes, got {actual}")]
    TooShort {
        /// Parameter name.
        name: &'static str,
        /// Minimum length.
        min: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Parameter is longer than the maximum length.
    #[error("{name} too long: expected at most {max} bytes, got {actual}")]
    TooLong {
        /// Parameter name.
        name: &'static str,
        /// Maximum length.
        max: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Parameter lies outside an inclusive range.
    #[error("{name} out of range: expected {min}..={max}, got {actual}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
        /// Supplied value.
        actual: usize,
    },
}

/// Opaque failure reported by a primitive backend despite valid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("primitive provider failure")]
pub struct ProviderError;
