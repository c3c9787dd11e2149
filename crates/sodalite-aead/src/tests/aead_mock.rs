// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Engine behaviour around the backend boundary.

use sodalite_core::ProviderError;

use crate::aead::Aes256Gcm;
use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::support::test_utils::{AeadMock, AeadMockBehaviour};
use crate::types::{Key, Nonce};

fn fixtures() -> (Key, Nonce) {
    (
        Key::from_bytes([0x11u8; KEY_SIZE]),
        Nonce::from_bytes([0x22u8; NONCE_SIZE]),
    )
}

#[test]
fn test_precondition_failures_never_reach_backend() {
    let aead = Aes256Gcm::with_backend(AeadMock::new(AeadMockBehaviour::None));
    let (key, nonce) = fixtures();

    assert!(
        aead.decrypt(&[0u8; TAG_SIZE - 1], b"", &nonce, &key)
            .unwrap_err()
            .is_param_error()
    );
    assert!(
        aead.decrypt_detached(b"abc", &[0u8; 3], b"", &nonce, &key)
            .unwrap_err()
            .is_param_error()
    );

    assert_eq!(aead.backend().encrypt_count(), 0);
    assert_eq!(aead.backend().decrypt_count(), 0);
}

#[test]
fn test_each_operation_calls_backend_once() {
    let aead = Aes256Gcm::with_backend(AeadMock::new(AeadMockBehaviour::None));
    let (key, nonce) = fixtures();

    let sealed = aead
        .encrypt(b"abc", b"", &nonce, &key)
        .expect("Failed to encrypt(..)");
    aead.decrypt(&sealed, b"", &nonce, &key)
        .expect("Failed to decrypt(..)");

    assert_eq!(aead.backend().encrypt_count(), 1);
    assert_eq!(aead.backend().decrypt_count(), 1);
}

#[test]
fn test_encrypt_provider_failure_propagates() {
    let aead = Aes256Gcm::with_backend(AeadMock::new(AeadMockBehaviour::FailEncryptAt(0)));
    let (key, nonce) = fixtures();

    assert_eq!(
        aead.encrypt(b"abc", b"", &nonce, &key),
        Err(AeadError::Provider(ProviderError))
    );

    // Only the configured call fails.
    assert!(aead.encrypt(b"abc", b"", &nonce, &key).is_ok());
}

#[test]
fn test_encrypt_detached_provider_failure_propagates() {
    let aead = Aes256Gcm::with_backend(AeadMock::new(AeadMockBehaviour::FailEncryptAt(0)));
    let (key, nonce) = fixtures();

    assert_eq!(
        aead.encrypt_detached(b"abc", b"", &nonce, &key),
        Err(AeadError::Provider(ProviderError))
    );
}

#[test]
fn test_encrypt_in_place_provider_failure_zeroizes() {
    let aead = Aes256Gcm::with_backend(AeadMock::new(AeadMockBehaviour::FailEncryptAt(0)));
    let (key, nonce) = fixtures();

    let mut buffer = b"plaintext".to_vec();
    let result = aead.encrypt_in_place_detached(&mut buffer, b"", &nonce, &key);

    assert_eq!(result, Err(AeadError::Provider(ProviderError)));
    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn test_decrypt_provider_failure_is_not_authentication_failure() {
    let mut mock = AeadMock::new(AeadMockBehaviour::None);
    mock.change_behaviour(AeadMockBehaviour::FailDecryptAt(0));
    let aead = Aes256Gcm::with_backend(mock);
    let (key, nonce) = fixtures();

    let sealed = aead
        .encrypt(b"abc", b"", &nonce, &key)
        .expect("Failed to encrypt(..)");
    let err = aead.decrypt(&sealed, b"", &nonce, &key).unwrap_err();

    assert_eq!(err, AeadError::Provider(ProviderError));
    assert!(!err.is_authentication_failure());
    assert!(!err.is_param_error());
}
