// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key, nonce and tag types.
//!
//! Fixed-size wrappers: a value of these types always has the exact length
//! the primitive requires. Slices are validated once, at construction.

use core::fmt;

use sodalite_core::{ParamError, check_size};
use zeroize::Zeroize;

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// AES-256-GCM secret key.
///
/// The engine never zeroizes keys on its own; call [`Zeroize::zeroize`] when
/// the key is no longer needed.
#[derive(Clone, Zeroize)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Wraps raw key bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = ParamError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("key", bytes.len(), KEY_SIZE)?;

        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);

        Ok(Self(key))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// AES-256-GCM public nonce.
///
/// Must be unique per (key, message). Uniqueness is the caller's invariant;
/// nothing here generates or tracks nonces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Wraps raw nonce bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw nonce bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = ParamError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("nonce", bytes.len(), NONCE_SIZE)?;

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(bytes);

        Ok(Self(nonce))
    }
}

/// Authentication tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    /// Wraps raw tag bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw tag bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = ParamError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("tag", bytes.len(), TAG_SIZE)?;

        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(bytes);

        Ok(Self(tag))
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Output of detached encryption.
///
/// The ciphertext is meaningless without its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached {
    /// Ciphertext, same length as the message.
    pub ciphertext: Vec<u8>,
    /// Authentication tag.
    pub tag: Tag,
}
