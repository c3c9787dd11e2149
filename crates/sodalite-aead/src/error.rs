// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD error types.

use sodalite_core::{ParamError, ProviderError};
use sodalite_rand::EntropyError;
use thiserror::Error;

/// Errors that can occur during AEAD operations.
///
/// [`AeadError::Param`] means the call itself was wrong and is never the
/// result of tampering. [`AeadError::AuthenticationFailed`] is the expected
/// outcome for a forged or corrupted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AeadError {
    /// A parameter failed validation before the primitive was invoked.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The tag does not authenticate the ciphertext and associated data.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// Key generation could not obtain entropy.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// The primitive failed despite valid parameters.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AeadError {
    /// Returns `true` for precondition failures (the caller used the API wrong).
    #[inline]
    pub fn is_param_error(&self) -> bool {
        matches!(self, AeadError::Param(_))
    }

    /// Returns `true` if the message failed verification.
    #[inline]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, AeadError::AuthenticationFailed)
    }
}
