// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sodalite_rand
//!
//! Cryptographically secure randomness for key generation.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`EntropySource`]: Interface for CSPRNGs, so key generation can be driven
//!   by a mock in tests
//! - [`generate_key()`]: fills a fixed-size key, wiping it if the source fails
//!
//! ## Example
//!
//! ```rust
//! use sodalite_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut key = [0u8; 32];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod generate_key;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use generate_key::generate_key;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
