// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Property tests: round-trip, length law, tamper detection.

use proptest::prelude::*;

use crate::aead::Aes256Gcm;
use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::types::{Key, Nonce};

fn key_strategy() -> impl Strategy<Value = [u8; KEY_SIZE]> {
    prop::array::uniform32(any::<u8>())
}

fn nonce_strategy() -> impl Strategy<Value = [u8; NONCE_SIZE]> {
    prop::array::uniform12(any::<u8>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_combined_roundtrip_and_length(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..512),
        aad in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let sealed = aead.encrypt(&message, &aad, &nonce, &key).expect("Failed to encrypt(..)");
        prop_assert_eq!(sealed.len(), message.len() + TAG_SIZE);

        let opened = aead.decrypt(&sealed, &aad, &nonce, &key).expect("Failed to decrypt(..)");
        prop_assert_eq!(opened, message);
    }

    #[test]
    fn prop_detached_roundtrip_and_length(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..512),
        aad in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let detached = aead
            .encrypt_detached(&message, &aad, &nonce, &key)
            .expect("Failed to encrypt_detached(..)");
        prop_assert_eq!(detached.ciphertext.len(), message.len());

        let opened = aead
            .decrypt_detached(&detached.ciphertext, detached.tag.as_ref(), &aad, &nonce, &key)
            .expect("Failed to decrypt_detached(..)");
        prop_assert_eq!(opened, message);
    }

    #[test]
    fn prop_bit_flip_in_sealed_is_rejected(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..128),
        aad in prop::collection::vec(any::<u8>(), 0..32),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let mut sealed = aead.encrypt(&message, &aad, &nonce, &key).expect("Failed to encrypt(..)");
        let index = position.index(sealed.len());
        sealed[index] ^= 1 << bit;

        prop_assert_eq!(
            aead.decrypt(&sealed, &aad, &nonce, &key),
            Err(AeadError::AuthenticationFailed)
        );
    }

    #[test]
    fn prop_bit_flip_in_aad_is_rejected(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..128),
        aad in prop::collection::vec(any::<u8>(), 1..32),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let detached = aead
            .encrypt_detached(&message, &aad, &nonce, &key)
            .expect("Failed to encrypt_detached(..)");

        let mut tampered = aad.clone();
        let index = position.index(tampered.len());
        tampered[index] ^= 1 << bit;

        prop_assert_eq!(
            aead.decrypt_detached(&detached.ciphertext, detached.tag.as_ref(), &tampered, &nonce, &key),
            Err(AeadError::AuthenticationFailed)
        );
    }

    #[test]
    fn prop_bit_flip_in_detached_ciphertext_is_rejected(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 1..128),
        aad in prop::collection::vec(any::<u8>(), 0..32),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let mut detached = aead
            .encrypt_detached(&message, &aad, &nonce, &key)
            .expect("Failed to encrypt_detached(..)");

        let index = position.index(detached.ciphertext.len());
        detached.ciphertext[index] ^= 1 << bit;

        prop_assert_eq!(
            aead.decrypt_detached(&detached.ciphertext, detached.tag.as_ref(), &aad, &nonce, &key),
            Err(AeadError::AuthenticationFailed)
        );
    }

    #[test]
    fn prop_bit_flip_in_detached_tag_is_rejected(
        key in key_strategy(),
        nonce in nonce_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..128),
        aad in prop::collection::vec(any::<u8>(), 0..32),
        position in 0usize..TAG_SIZE,
        bit in 0u8..8,
    ) {
        let aead = Aes256Gcm::new();
        let key = Key::from_bytes(key);
        let nonce = Nonce::from_bytes(nonce);

        let detached = aead
            .encrypt_detached(&message, &aad, &nonce, &key)
            .expect("Failed to encrypt_detached(..)");

        let mut tag = *detached.tag.as_bytes();
        tag[position] ^= 1 << bit;

        prop_assert_eq!(
            aead.decrypt_detached(&detached.ciphertext, &tag, &aad, &nonce, &key),
            Err(AeadError::AuthenticationFailed)
        );
    }
}
