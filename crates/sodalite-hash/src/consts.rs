// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b generic-hash size constants.

/// Minimum digest length in bytes
pub const BYTES_MIN: usize = 16;

/// Maximum digest length in bytes
pub const BYTES_MAX: usize = 64;

/// Recommended digest length in bytes
pub const BYTES: usize = 32;

/// Minimum key length in bytes
pub const KEYBYTES_MIN: usize = 16;

/// Maximum key length in bytes
pub const KEYBYTES_MAX: usize = 64;

/// Recommended key length in bytes
pub const KEYBYTES: usize = 32;

/// Size of the opaque streaming state in the reference C layout
pub const STATE_BYTES: usize = 384;

/// Primitive name
pub const PRIMITIVE: &str = "blake2b";

/// Minimum digest length in bytes.
#[inline]
pub const fn bytes_min() -> usize {
    BYTES_MIN
}

/// Maximum digest length in bytes.
#[inline]
pub const fn bytes_max() -> usize {
    BYTES_MAX
}

/// Recommended digest length in bytes.
#[inline]
pub const fn bytes() -> usize {
    BYTES
}

/// Minimum key length in bytes.
#[inline]
pub const fn keybytes_min() -> usize {
    KEYBYTES_MIN
}

/// Maximum key length in bytes.
#[inline]
pub const fn keybytes_max() -> usize {
    KEYBYTES_MAX
}

/// Recommended key length in bytes.
#[inline]
pub const fn keybytes() -> usize {
    KEYBYTES
}

/// Size of the opaque streaming state.
#[inline]
pub const fn state_bytes() -> usize {
    STATE_BYTES
}

/// Primitive name.
#[inline]
pub const fn primitive() -> &'static str {
    PRIMITIVE
}
