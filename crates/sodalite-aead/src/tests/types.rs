// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sodalite_core::ParamError;
use zeroize::Zeroize;

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::types::{Key, Nonce, Tag};

#[test]
fn test_key_try_from_slice() {
    let key = Key::try_from([3u8; KEY_SIZE].as_slice()).expect("Failed to Key::try_from(..)");
    assert_eq!(key.as_bytes(), &[3u8; KEY_SIZE]);

    assert_eq!(
        Key::try_from([0u8; KEY_SIZE - 1].as_slice()).map(|_| ()),
        Err(ParamError::InvalidSize {
            name: "key",
            expected: KEY_SIZE,
            actual: KEY_SIZE - 1
        })
    );
    assert!(Key::try_from([0u8; 0].as_slice()).is_err());
}

#[test]
fn test_nonce_try_from_slice() {
    assert!(Nonce::try_from([0u8; NONCE_SIZE].as_slice()).is_ok());
    assert_eq!(
        Nonce::try_from([0u8; 24].as_slice()),
        Err(ParamError::InvalidSize {
            name: "nonce",
            expected: NONCE_SIZE,
            actual: 24
        })
    );
}

#[test]
fn test_tag_try_from_slice() {
    let tag = Tag::try_from([5u8; TAG_SIZE].as_slice()).expect("Failed to Tag::try_from(..)");
    assert_eq!(tag.as_ref(), &[5u8; TAG_SIZE]);

    assert!(Tag::try_from([0u8; TAG_SIZE + 1].as_slice()).is_err());
}

#[test]
fn test_key_debug_is_redacted() {
    let key = Key::from_bytes([0xAAu8; KEY_SIZE]);

    assert_eq!(format!("{:?}", key), "Key([REDACTED])");
}

#[test]
fn test_key_zeroize() {
    let mut key = Key::from_bytes([0xAAu8; KEY_SIZE]);
    key.zeroize();

    assert_eq!(key.as_bytes(), &[0u8; KEY_SIZE]);
}
