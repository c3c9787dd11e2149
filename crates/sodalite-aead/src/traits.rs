// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD backend trait.

use crate::AeadError;
use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Single-call AES-256-GCM transforms.
///
/// Implementations receive already-validated, fixed-size inputs. They report
/// [`AeadError::AuthenticationFailed`] for a tag mismatch and
/// [`AeadError::Provider`] for any other failure; they never see a
/// parameter error.
pub trait AeadBackend {
    /// Encrypt `data` in place and write the authentication tag.
    fn encrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) -> Result<(), AeadError>;

    /// Verify `tag` and decrypt `data` in place.
    ///
    /// On failure the contents of `data` are unspecified.
    fn decrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError>;
}
