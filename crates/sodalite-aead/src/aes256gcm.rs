// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256-GCM backend on top of the RustCrypto `aes-gcm` crate.
//!
//! The `aes` crate selects AES-NI/ARMv8 instructions at runtime and falls
//! back to a constant-time software implementation, so this backend works on
//! every target regardless of what [`sodalite_core::capabilities`] reports.

use aes_gcm::Aes256Gcm as Aes256GcmCipher;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use sodalite_core::ProviderError;

use crate::AeadError;
use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::traits::AeadBackend;

/// Production AES-256-GCM backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes256GcmBackend;

impl AeadBackend for Aes256GcmBackend {
    #[inline]
    fn encrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let cipher = Aes256GcmCipher::new(GenericArray::from_slice(key));

        let computed = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, data)
            .map_err(|_| ProviderError)?;

        tag.copy_from_slice(&computed);

        Ok(())
    }

    #[inline]
    fn decrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let cipher = Aes256GcmCipher::new(GenericArray::from_slice(key));

        // Tag comparison is constant-time inside aes-gcm; lengths were
        // validated upstream, so any error here is a verification failure.
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                aad,
                data,
                GenericArray::from_slice(tag),
            )
            .map_err(|_| AeadError::AuthenticationFailed)
    }
}
