// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash error types.

use sodalite_core::{ParamError, ProviderError};
use sodalite_rand::EntropyError;
use thiserror::Error;

/// Errors that can occur during hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashError {
    /// A parameter failed validation before the primitive was invoked.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The primitive failed despite valid parameters.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The state saw a provider failure earlier and can no longer be used.
    #[error("hash state poisoned by an earlier provider failure")]
    Poisoned,

    /// Key generation could not obtain entropy.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl HashError {
    /// Returns `true` for precondition failures (the caller used the API wrong).
    #[inline]
    pub fn is_param_error(&self) -> bool {
        matches!(self, HashError::Param(_))
    }
}
