// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256-GCM engine.
//!
//! This module provides the [`Aes256Gcm`] struct: parameter validation,
//! buffer sizing and tag placement around a single-call [`AeadBackend`].
//!
//! ## Modes
//!
//! - **Combined**: `ciphertext || tag`, `len(message) + TAG_SIZE` bytes
//! - **Detached**: ciphertext and tag returned separately
//! - **In-place detached**: caller-owned buffer transformed in place
//!
//! All size checks run before the backend is invoked. On a verification
//! failure no plaintext is returned and every working buffer is zeroized.

use sodalite_core::{ParamError, capabilities, check_size_min};
use sodalite_rand::{EntropySource, SystemEntropySource, generate_key};
use zeroize::Zeroize;

use crate::aes256gcm::Aes256GcmBackend;
use crate::consts::{KEY_SIZE, MESSAGE_MAX, TAG_SIZE};
use crate::error::AeadError;
use crate::traits::AeadBackend;
use crate::types::{Detached, Key, Nonce, Tag};

fn check_message_len(name: &'static str, len: usize) -> Result<(), ParamError> {
    if len as u64 > MESSAGE_MAX {
        return Err(ParamError::TooLong {
            name,
            max: usize::try_from(MESSAGE_MAX).unwrap_or(usize::MAX),
            actual: len,
        });
    }

    Ok(())
}

/// AES-256-GCM authenticated encryption with associated data.
///
/// Stateless apart from its backend: one engine may be shared across threads
/// and used with any number of keys.
pub struct Aes256Gcm<B: AeadBackend = Aes256GcmBackend> {
    backend: B,
}

impl Default for Aes256Gcm {
    fn default() -> Self {
        Self::new()
    }
}

impl Aes256Gcm {
    /// Creates an engine backed by the production AES-256-GCM implementation.
    pub fn new() -> Self {
        Self::with_backend(Aes256GcmBackend)
    }

    /// Reports whether hardware-accelerated AES-GCM is available on this CPU.
    ///
    /// Advisory only: every operation works either way.
    #[inline]
    pub fn is_available() -> bool {
        capabilities().aes_gcm_accelerated
    }

    /// Generates a fresh key from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::Entropy`] if the entropy source fails.
    pub fn generate_key() -> Result<Key, AeadError> {
        Self::generate_key_with(&SystemEntropySource {})
    }

    /// Generates a fresh key from the given entropy source.
    pub fn generate_key_with(entropy: &dyn EntropySource) -> Result<Key, AeadError> {
        let mut bytes = [0u8; KEY_SIZE];
        generate_key(entropy, &mut bytes)?;

        let key = Key::from_bytes(bytes);
        bytes.zeroize();

        Ok(key)
    }
}

impl<B: AeadBackend> Aes256Gcm<B> {
    /// Creates an engine on top of a custom backend.
    pub fn with_backend(backend: B) -> Self {
        sodalite_core::init();
        Self { backend }
    }

    /// Borrows the backend.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Encrypts `message` and returns `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TooLong`] if the message exceeds
    /// [`MESSAGE_MAX`](crate::MESSAGE_MAX), or [`AeadError::Provider`] if
    /// the backend fails.
    pub fn encrypt(
        &self,
        message: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Vec<u8>, AeadError> {
        check_message_len("message", message.len())?;

        let mut out = Vec::with_capacity(message.len() + TAG_SIZE);
        out.extend_from_slice(message);

        let tag = self.seal(&mut out, aad, nonce, key)?;
        out.extend_from_slice(tag.as_bytes());

        Ok(out)
    }

    /// Verifies and decrypts `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TooShort`] if the input is shorter than
    /// [`TAG_SIZE`](crate::TAG_SIZE), and [`AeadError::AuthenticationFailed`]
    /// if the tag does not verify.
    pub fn decrypt(
        &self,
        ciphertext_with_tag: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Vec<u8>, AeadError> {
        check_size_min("ciphertext", ciphertext_with_tag.len(), TAG_SIZE)?;

        let (ciphertext, tag) = ciphertext_with_tag.split_at(ciphertext_with_tag.len() - TAG_SIZE);
        let tag = Tag::try_from(tag)?;

        self.open_to_vec(ciphertext, &tag, aad, nonce, key)
    }

    /// Encrypts `message`, returning ciphertext and tag separately.
    pub fn encrypt_detached(
        &self,
        message: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Detached, AeadError> {
        check_message_len("message", message.len())?;

        let mut ciphertext = message.to_vec();
        let tag = self.seal(&mut ciphertext, aad, nonce, key)?;

        Ok(Detached { ciphertext, tag })
    }

    /// Verifies `tag` and decrypts `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidSize`] unless `tag` is exactly
    /// [`TAG_SIZE`](crate::TAG_SIZE) bytes, and
    /// [`AeadError::AuthenticationFailed`] if the tag does not verify.
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        tag: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Vec<u8>, AeadError> {
        let tag = Tag::try_from(tag)?;

        self.open_to_vec(ciphertext, &tag, aad, nonce, key)
    }

    /// Encrypts `buffer` in place and returns the tag.
    pub fn encrypt_in_place_detached(
        &self,
        buffer: &mut [u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Tag, AeadError> {
        check_message_len("message", buffer.len())?;

        self.seal(buffer, aad, nonce, key)
    }

    /// Verifies `tag` and decrypts `buffer` in place.
    ///
    /// On any error `buffer` is zeroized.
    pub fn decrypt_in_place_detached(
        &self,
        buffer: &mut [u8],
        tag: &Tag,
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<(), AeadError> {
        check_message_len("ciphertext", buffer.len())?;

        self.open(buffer, tag, aad, nonce, key)
    }

    fn seal(&self, data: &mut [u8], aad: &[u8], nonce: &Nonce, key: &Key) -> Result<Tag, AeadError> {
        let mut tag = [0u8; TAG_SIZE];

        if let Err(err) =
            self.backend
                .encrypt_detached(key.as_bytes(), nonce.as_bytes(), aad, data, &mut tag)
        {
            tracing::warn!(message_len = data.len(), "aead encrypt: provider failure");
            data.zeroize();
            return Err(err);
        }

        Ok(Tag::from_bytes(tag))
    }

    fn open(
        &self,
        data: &mut [u8],
        tag: &Tag,
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<(), AeadError> {
        if let Err(err) =
            self.backend
                .decrypt_detached(key.as_bytes(), nonce.as_bytes(), aad, data, tag.as_bytes())
        {
            match err {
                AeadError::AuthenticationFailed => tracing::debug!(
                    ciphertext_len = data.len(),
                    aad_len = aad.len(),
                    "aead decrypt: authentication failed"
                ),
                _ => tracing::warn!(ciphertext_len = data.len(), "aead decrypt: provider failure"),
            }

            data.zeroize();
            return Err(err);
        }

        Ok(())
    }

    fn open_to_vec(
        &self,
        ciphertext: &[u8],
        tag: &Tag,
        aad: &[u8],
        nonce: &Nonce,
        key: &Key,
    ) -> Result<Vec<u8>, AeadError> {
        check_message_len("ciphertext", ciphertext.len())?;

        let mut plaintext = ciphertext.to_vec();
        self.open(&mut plaintext, tag, aad, nonce, key)?;

        Ok(plaintext)
    }
}

impl<B: AeadBackend> core::fmt::Debug for Aes256Gcm<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes256Gcm {{ accelerated: {} }}", capabilities().aes_gcm_accelerated)
    }
}
