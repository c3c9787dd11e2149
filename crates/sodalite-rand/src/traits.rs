// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Source of key material.
///
/// Engines take `&dyn EntropySource` so key generation can be driven by
/// `MockEntropySource` in tests.
pub trait EntropySource {
    /// Fills all of `dest` with uniformly random bytes.
    ///
    /// On error the contents of `dest` are unspecified; use
    /// [`generate_key()`](crate::generate_key()) to get them wiped.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
