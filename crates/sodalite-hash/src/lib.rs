// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sodalite_hash
//!
//! BLAKE2b generic hashing: one-shot or streaming, keyed or unkeyed, with a
//! digest length between [`BYTES_MIN`] and [`BYTES_MAX`].
//!
//! ```rust
//! use sodalite_hash::{BYTES, GenericHash};
//!
//! let hasher = GenericHash::new();
//! let digest = hasher.hash(BYTES, b"hello world", None).expect("Failed to hash(..)");
//!
//! let mut state = hasher.init(None, BYTES).expect("Failed to init(..)");
//! state.update(b"hello ").expect("Failed to update(..)");
//! state.update(b"world").expect("Failed to update(..)");
//!
//! assert_eq!(state.finalize(BYTES).expect("Failed to finalize(..)"), digest);
//! ```
//!
//! Digests of different lengths are independent: a 32-byte digest is not a
//! prefix of the 64-byte digest of the same input.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod blake2b;
mod consts;
mod error;
mod generichash;
mod key;
mod state;
mod support;
mod traits;

pub use blake2b::Blake2bBackend;
pub use consts::{
    BYTES, BYTES_MAX, BYTES_MIN, KEYBYTES, KEYBYTES_MAX, KEYBYTES_MIN, PRIMITIVE, STATE_BYTES,
    bytes, bytes_max, bytes_min, keybytes, keybytes_max, keybytes_min, primitive, state_bytes,
};
pub use error::HashError;
pub use generichash::{GenericHash, hash, init};
pub use key::HashKey;
pub use state::HashState;
pub use traits::HashBackend;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
