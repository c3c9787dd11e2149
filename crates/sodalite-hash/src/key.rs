// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash key.

use core::fmt;

use sodalite_core::{ParamError, check_in_range};
use sodalite_rand::{EntropySource, SystemEntropySource, generate_key};
use zeroize::Zeroize;

use crate::consts::{KEYBYTES, KEYBYTES_MAX, KEYBYTES_MIN};
use crate::error::HashError;

/// Key for keyed BLAKE2b hashing.
///
/// Always between [`KEYBYTES_MIN`] and [`KEYBYTES_MAX`] bytes long. Unkeyed
/// hashing is requested with `None`, never with an empty key.
///
/// The engine never zeroizes keys on its own; call [`Zeroize::zeroize`] when
/// the key is no longer needed.
#[derive(Clone, Zeroize)]
pub struct HashKey {
    bytes: [u8; KEYBYTES_MAX],
    len: usize,
}

impl HashKey {
    /// Copies `bytes` into a new key.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::OutOfRange`] unless
    /// `KEYBYTES_MIN <= bytes.len() <= KEYBYTES_MAX`.
    pub fn new(bytes: &[u8]) -> Result<Self, ParamError> {
        check_in_range("key", bytes.len(), KEYBYTES_MIN, KEYBYTES_MAX)?;

        let mut key = Self {
            bytes: [0u8; KEYBYTES_MAX],
            len: bytes.len(),
        };
        key.bytes[..bytes.len()].copy_from_slice(bytes);

        Ok(key)
    }

    /// Generates a [`KEYBYTES`]-byte key from the operating system CSPRNG.
    pub fn generate() -> Result<Self, HashError> {
        Self::generate_with(&SystemEntropySource {})
    }

    /// Generates a [`KEYBYTES`]-byte key from the given entropy source.
    pub fn generate_with(entropy: &dyn EntropySource) -> Result<Self, HashError> {
        let mut bytes = [0u8; KEYBYTES];
        generate_key(entropy, &mut bytes)?;

        let key = Self::new(&bytes);
        bytes.zeroize();

        Ok(key?)
    }

    /// Borrows the key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl TryFrom<&[u8]> for HashKey {
    type Error = ParamError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashKey {{ len: {}, bytes: [REDACTED] }}", self.len)
    }
}
