// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b generic-hash engine.
//!
//! One-shot hashing and creation of streaming [`HashState`]s on top of a
//! [`HashBackend`]. Output and key lengths are validated before the backend
//! is ever invoked.

use sodalite_core::{ParamError, check_in_range};

use crate::blake2b::Blake2bBackend;
use crate::consts::{BYTES_MAX, BYTES_MIN};
use crate::error::HashError;
use crate::key::HashKey;
use crate::state::HashState;
use crate::traits::HashBackend;

#[inline]
fn check_outlen(outlen: usize) -> Result<(), ParamError> {
    check_in_range("outlen", outlen, BYTES_MIN, BYTES_MAX)
}

#[inline]
fn key_bytes(key: Option<&HashKey>) -> &[u8] {
    key.map_or(&[][..], HashKey::as_bytes)
}

/// Keyed or unkeyed BLAKE2b with a caller-chosen digest length.
///
/// Pass `None` as the key for plain hashing and `Some(&key)` for a MAC.
#[derive(Debug, Clone)]
pub struct GenericHash<B: HashBackend = Blake2bBackend> {
    backend: B,
}

impl Default for GenericHash {
    fn default() -> Self {
        Self::new()
    }
}

impl GenericHash {
    /// Creates an engine backed by the production BLAKE2b implementation.
    pub fn new() -> Self {
        Self::with_backend(Blake2bBackend)
    }
}

impl<B: HashBackend + Clone> GenericHash<B> {
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

    /// Returns the `outlen`-byte digest of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::OutOfRange`] if `outlen` is outside
    /// `BYTES_MIN..=BYTES_MAX`.
    ///
    /// [`ParamError::OutOfRange`]: sodalite_core::ParamError::OutOfRange
    pub fn hash(
        &self,
        outlen: usize,
        input: &[u8],
        key: Option<&HashKey>,
    ) -> Result<Vec<u8>, HashError> {
        check_outlen(outlen)?;

        let mut out = vec![0u8; outlen];
        self.digest_into(&mut out, input, key)?;

        Ok(out)
    }

    /// Writes the digest of `input` into `out`; `out.len()` is the digest length
    /// and is validated as `outlen`.
    pub fn hash_into(
        &self,
        out: &mut [u8],
        input: &[u8],
        key: Option<&HashKey>,
    ) -> Result<(), HashError> {
        check_outlen(out.len())?;

        self.digest_into(out, input, key)
    }

    fn digest_into(
        &self,
        out: &mut [u8],
        input: &[u8],
        key: Option<&HashKey>,
    ) -> Result<(), HashError> {
        if let Err(err) = self.backend.hash(key_bytes(key), input, out) {
            tracing::warn!(input_len = input.len(), outlen = out.len(), "hash: provider failure");
            return Err(err.into());
        }

        Ok(())
    }

    /// Starts a streaming computation bound to `key` and `outlen`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::OutOfRange`] if `outlen` is outside
    /// `BYTES_MIN..=BYTES_MAX`.
    ///
    /// [`ParamError::OutOfRange`]: sodalite_core::ParamError::OutOfRange
    pub fn init(&self, key: Option<&HashKey>, outlen: usize) -> Result<HashState<B>, HashError> {
        check_outlen(outlen)?;

        let state = match self.backend.init(key_bytes(key), outlen) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(outlen, "hash init: provider failure");
                return Err(err.into());
            }
        };

        Ok(HashState::new(
            self.backend.clone(),
            state,
            outlen,
            key.is_some(),
        ))
    }
}

/// One-shot digest with the default BLAKE2b engine.
pub fn hash(outlen: usize, input: &[u8], key: Option<&HashKey>) -> Result<Vec<u8>, HashError> {
    GenericHash::new().hash(outlen, input, key)
}

/// Starts a streaming computation with the default BLAKE2b engine.
pub fn init(key: Option<&HashKey>, outlen: usize) -> Result<HashState, HashError> {
    GenericHash::new().init(key, outlen)
}
