// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash state.

use core::fmt;

use sodalite_core::{check_in_range, check_size};

use crate::blake2b::Blake2bBackend;
use crate::consts::{BYTES_MAX, BYTES_MIN};
use crate::error::HashError;
use crate::traits::HashBackend;

enum Phase<S> {
    Ready(S),
    Poisoned,
}

/// In-progress digest computation created by [`GenericHash::init`].
///
/// Update any number of times, then call [`finalize`](Self::finalize)
/// exactly once. `finalize` takes the state by value, so a finished state
/// cannot be reused.
///
/// If the backend reports a failure during [`update`](Self::update) the
/// state is poisoned and every later call returns [`HashError::Poisoned`].
///
/// [`GenericHash::init`]: crate::GenericHash::init
pub struct HashState<B: HashBackend = Blake2bBackend> {
    backend: B,
    phase: Phase<B::State>,
    outlen: usize,
    keyed: bool,
}

impl<B: HashBackend> HashState<B> {
    pub(crate) fn new(backend: B, state: B::State, outlen: usize, keyed: bool) -> Self {
        Self {
            backend,
            phase: Phase::Ready(state),
            outlen,
            keyed,
        }
    }

    /// Digest length bound at init.
    #[inline]
    pub fn output_len(&self) -> usize {
        self.outlen
    }

    /// Whether the state was initialized with a key.
    #[inline]
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// Whether an earlier backend failure poisoned this state.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(self.phase, Phase::Poisoned)
    }

    /// Absorbs `chunk` after everything absorbed so far.
    ///
    /// An empty chunk is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Poisoned`] if an earlier update failed, or
    /// [`HashError::Provider`] if this update fails (which poisons the state).
    pub fn update(&mut self, chunk: &[u8]) -> Result<&mut Self, HashError> {
        let Phase::Ready(state) = &mut self.phase else {
            return Err(HashError::Poisoned);
        };

        if chunk.is_empty() {
            return Ok(self);
        }

        if let Err(err) = self.backend.update(state, chunk) {
            tracing::warn!(chunk_len = chunk.len(), "hash update: provider failure");
            self.phase = Phase::Poisoned;
            return Err(err.into());
        }

        Ok(self)
    }

    /// Consumes the state and returns the digest.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::OutOfRange`] if `outlen` is outside
    /// `BYTES_MIN..=BYTES_MAX` and [`ParamError::InvalidSize`] if it differs
    /// from the length given at init.
    ///
    /// [`ParamError::OutOfRange`]: sodalite_core::ParamError::OutOfRange
    /// [`ParamError::InvalidSize`]: sodalite_core::ParamError::InvalidSize
    pub fn finalize(self, outlen: usize) -> Result<Vec<u8>, HashError> {
        self.check_outlen(outlen)?;

        let mut out = vec![0u8; outlen];
        self.finalize_into(&mut out)?;

        Ok(out)
    }

    /// Consumes the state and writes the digest into `out`.
    ///
    /// `out.len()` is the requested digest length.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), HashError> {
        self.check_outlen(out.len())?;

        let Phase::Ready(state) = self.phase else {
            return Err(HashError::Poisoned);
        };

        if let Err(err) = self.backend.finalize(state, out) {
            tracing::warn!(outlen = out.len(), "hash finalize: provider failure");
            return Err(err.into());
        }

        Ok(())
    }

    fn check_outlen(&self, outlen: usize) -> Result<(), HashError> {
        check_in_range("outlen", outlen, BYTES_MIN, BYTES_MAX)?;
        check_size("outlen", outlen, self.outlen)?;

        Ok(())
    }
}

impl<B> Clone for HashState<B>
where
    B: HashBackend + Clone,
    B::State: Clone,
{
    fn clone(&self) -> Self {
        let phase = match &self.phase {
            Phase::Ready(state) => Phase::Ready(state.clone()),
            Phase::Poisoned => Phase::Poisoned,
        };

        Self {
            backend: self.backend.clone(),
            phase,
            outlen: self.outlen,
            keyed: self.keyed,
        }
    }
}

impl<B: HashBackend> fmt::Debug for HashState<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashState")
            .field("outlen", &self.outlen)
            .field("keyed", &self.keyed)
            .field("poisoned", &self.is_poisoned())
            .finish()
    }
}
