// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b backend on top of `blake2b_simd`.

use blake2b_simd::{KEYBYTES as BLAKE2B_KEYBYTES, OUTBYTES as BLAKE2B_OUTBYTES, Params, State};
use sodalite_core::ProviderError;

use crate::traits::HashBackend;

/// Production BLAKE2b backend.
///
/// The output length is part of the BLAKE2b parameter block, so digests of
/// different lengths are unrelated rather than truncations of each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake2bBackend;

impl Blake2bBackend {
    // blake2b_simd panics on these; report them as provider failures instead.
    #[inline]
    fn params(key: &[u8], outlen: usize) -> Result<Params, ProviderError> {
        if outlen == 0 || outlen > BLAKE2B_OUTBYTES || key.len() > BLAKE2B_KEYBYTES {
            return Err(ProviderError);
        }

        let mut params = Params::new();
        params.hash_length(outlen).key(key);

        Ok(params)
    }
}

impl HashBackend for Blake2bBackend {
    type State = State;

    fn init(&self, key: &[u8], outlen: usize) -> Result<State, ProviderError> {
        Ok(Self::params(key, outlen)?.to_state())
    }

    #[inline]
    fn update(&self, state: &mut State, input: &[u8]) -> Result<(), ProviderError> {
        state.update(input);
        Ok(())
    }

    fn finalize(&self, state: State, out: &mut [u8]) -> Result<(), ProviderError> {
        let digest = state.finalize();
        let bytes = digest.as_bytes();

        if bytes.len() != out.len() {
            return Err(ProviderError);
        }

        out.copy_from_slice(bytes);

        Ok(())
    }

    fn hash(&self, key: &[u8], input: &[u8], out: &mut [u8]) -> Result<(), ProviderError> {
        let digest = Self::params(key, out.len())?.hash(input);
        let bytes = digest.as_bytes();

        if bytes.len() != out.len() {
            return Err(ProviderError);
        }

        out.copy_from_slice(bytes);

        Ok(())
    }
}
