// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sodalite_aead
//!
//! AES-256-GCM authenticated encryption with associated data.
//!
//! ```rust
//! use sodalite_aead::{Aes256Gcm, Nonce, TAG_SIZE};
//!
//! let aead = Aes256Gcm::new();
//! let key = Aes256Gcm::generate_key().expect("Failed to generate_key()");
//! let nonce = Nonce::from_bytes([0u8; 12]);
//!
//! let sealed = aead.encrypt(b"hello", b"header", &nonce, &key).expect("Failed to encrypt(..)");
//! assert_eq!(sealed.len(), 5 + TAG_SIZE);
//!
//! let opened = aead.decrypt(&sealed, b"header", &nonce, &key).expect("Failed to decrypt(..)");
//! assert_eq!(opened, b"hello");
//! ```
//!
//! ## Nonces
//!
//! A nonce must never be reused with the same key. The engine neither
//! generates nor tracks nonces; that invariant belongs to the caller.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aead;
mod aes256gcm;
mod consts;
mod error;
mod support;
mod traits;
mod types;

pub use aead::Aes256Gcm;
pub use aes256gcm::Aes256GcmBackend;
pub use consts::{KEY_SIZE, MESSAGE_MAX, NONCE_SIZE, NSEC_SIZE, PRIMITIVE, TAG_SIZE};
pub use error::AeadError;
pub use traits::AeadBackend;
pub use types::{Detached, Key, Nonce, Tag};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
