// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock AEAD for testing.

use core::cell::Cell;

use sodalite_core::ProviderError;

use crate::aes256gcm::Aes256GcmBackend;
use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::traits::AeadBackend;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadMockBehaviour {
    /// No failure.
    None,
    /// Fail encrypt at call index (0-indexed).
    FailEncryptAt(usize),
    /// Fail decrypt with a provider error at call index (0-indexed).
    FailDecryptAt(usize),
}

/// Mock AEAD backed by the real AES-256-GCM backend.
pub struct AeadMock {
    backend: Aes256GcmBackend,
    behaviour: AeadMockBehaviour,
    encrypt_count: Cell<usize>,
    decrypt_count: Cell<usize>,
}

impl AeadMock {
    /// Creates a mock with the given behaviour.
    pub fn new(behaviour: AeadMockBehaviour) -> Self {
        Self {
            backend: Aes256GcmBackend,
            behaviour,
            encrypt_count: Cell::new(0),
            decrypt_count: Cell::new(0),
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: AeadMockBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of backend encrypt calls observed so far.
    pub fn encrypt_count(&self) -> usize {
        self.encrypt_count.get()
    }

    /// Number of backend decrypt calls observed so far.
    pub fn decrypt_count(&self) -> usize {
        self.decrypt_count.get()
    }
}

impl AeadBackend for AeadMock {
    fn encrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let current = self.encrypt_count.get();
        self.encrypt_count.set(current + 1);

        if let AeadMockBehaviour::FailEncryptAt(idx) = self.behaviour {
            if current == idx {
                return Err(ProviderError.into());
            }
        }

        self.backend.encrypt_detached(key, nonce, aad, data, tag)
    }

    fn decrypt_detached(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let current = self.decrypt_count.get();
        self.decrypt_count.set(current + 1);

        if let AeadMockBehaviour::FailDecryptAt(idx) = self.behaviour {
            if current == idx {
                return Err(ProviderError.into());
            }
        }

        self.backend.decrypt_detached(key, nonce, aad, data, tag)
    }
}
