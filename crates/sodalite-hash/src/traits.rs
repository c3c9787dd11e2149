// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash backend trait.

use sodalite_core::ProviderError;

/// Single-call BLAKE2b transforms.
///
/// Implementations receive already-validated inputs: `key` is empty
/// (unkeyed) or within the key bounds, and every output length is within the
/// digest bounds.
pub trait HashBackend {
    /// In-progress digest computation.
    type State;

    /// Creates a state bound to `key` and `outlen`.
    fn init(&self, key: &[u8], outlen: usize) -> Result<Self::State, ProviderError>;

    /// Absorbs `input` as a continuation of everything absorbed so far.
    fn update(&self, state: &mut Self::State, input: &[u8]) -> Result<(), ProviderError>;

    /// Consumes the state and writes the digest into `out`.
    fn finalize(&self, state: Self::State, out: &mut [u8]) -> Result<(), ProviderError>;

    /// One-shot digest of `input` into `out`.
    fn hash(&self, key: &[u8], input: &[u8], out: &mut [u8]) -> Result<(), ProviderError> {
        let mut state = self.init(key, out.len())?;
        self.update(&mut state, input)?;
        self.finalize(state, out)
    }
}
