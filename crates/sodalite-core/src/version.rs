// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
#[inline]
pub fn version_string() -> &'static str {
    VERSION
}

/// Returns the library major version.
#[inline]
pub fn library_version_major() -> u32 {
    env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or_default()
}

/// Returns the library minor version.
#[inline]
pub fn library_version_minor() -> u32 {
    env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or_default()
}
