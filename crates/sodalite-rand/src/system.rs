// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

type FillFn = fn(&mut [u8]) -> Result<(), getrandom::Error>;

/// Operating system CSPRNG, read through `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    pub(crate) fn fill_with(fill: FillFn, dest: &mut [u8]) -> Result<(), EntropyError> {
        if let Err(err) = fill(dest) {
            tracing::warn!(len = dest.len(), error = %err, "getrandom failed");
            dest.zeroize();
            return Err(EntropyError::EntropyNotAvailable);
        }

        Ok(())
    }
}

impl EntropySource for SystemEntropySource {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_with(getrandom::fill, dest)
    }
}
