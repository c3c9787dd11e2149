// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size key generation.

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Fills `output_key` with `N` fresh bytes from `entropy`.
///
/// On failure `output_key` is zeroized before the error is returned, so a
/// partially filled key never escapes.
///
/// ```rust
/// use sodalite_rand::{SystemEntropySource, generate_key};
///
/// let mut key = [0u8; 32];
/// generate_key(&SystemEntropySource {}, &mut key).expect("Failed to generate_key(..)");
/// ```
pub fn generate_key<const N: usize>(
    entropy: &dyn EntropySource,
    output_key: &mut [u8; N],
) -> Result<(), EntropyError> {
    if let Err(err) = entropy.fill_bytes(output_key) {
        output_key.zeroize();
        return Err(err);
    }

    Ok(())
}
