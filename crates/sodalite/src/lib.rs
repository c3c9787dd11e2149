// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>AES-256-GCM and BLAKE2b for Rust, with typed sizes and explicit errors.</em></p>
//!
//! ---
//!
//! Sodalite exposes two primitives:
//!
//! - **[`aead`]**: AES-256-GCM authenticated encryption with associated data,
//!   in combined, detached and in-place modes
//! - **[`hash`]**: BLAKE2b generic hashing, one-shot or streaming, keyed or
//!   unkeyed, with a digest length between 16 and 64 bytes
//!
//! Every size is a compile-time constant and every parameter is validated
//! before the underlying primitive runs.
//!
//! # Quick Start
//!
//! ```rust
//! use sodalite::aead::{Aes256Gcm, Nonce};
//! use sodalite::hash::{self, BYTES, HashKey};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sodalite::init();
//!
//!     // Authenticated encryption
//!     let aead = Aes256Gcm::new();
//!     let key = Aes256Gcm::generate_key()?;
//!     let nonce = Nonce::from_bytes([7u8; 12]);
//!
//!     let sealed = aead.encrypt(b"attack at dawn", b"v1", &nonce, &key)?;
//!     let opened = aead.decrypt(&sealed, b"v1", &nonce, &key)?;
//!     assert_eq!(opened, b"attack at dawn");
//!
//!     // Keyed streaming hash
//!     let mac_key = HashKey::generate()?;
//!     let mut state = hash::init(Some(&mac_key), BYTES)?;
//!     state.update(b"attack ")?;
//!     state.update(b"at dawn")?;
//!     let tag = state.finalize(BYTES)?;
//!
//!     assert_eq!(tag, hash::hash(BYTES, b"attack at dawn", Some(&mac_key))?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! - Wrong sizes are [`ParamError`]s, reported before any cryptography runs
//! - A tag that does not verify is `AeadError::AuthenticationFailed`; no
//!   plaintext is ever returned alongside it
//! - A failing primitive is a [`ProviderError`]; a streaming hash state that
//!   saw one is poisoned
//!
//! # Nonces
//!
//! Never reuse a nonce with the same AES-256-GCM key. The library neither
//! generates nor tracks nonces.
//!
//! # Testing
//!
//! The `test-utils` feature exposes mock backends (`AeadMock`, `HashMock`)
//! and a mock entropy source for failure injection in downstream tests.
//!
//! # License
//!
//! GPL-3.0-only

pub use sodalite_aead as aead;
pub use sodalite_hash as hash;
pub use sodalite_rand as rand;

pub use sodalite_core::{
    Capabilities, ParamError, ProviderError, VERSION, capabilities, init, library_version_major,
    library_version_minor, version_string,
};
