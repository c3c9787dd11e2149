// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_constant() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0xAB));
    let mut dest = [0u8; 16];

    entropy.fill_bytes(&mut dest).expect("Failed to fill_bytes(..)");

    assert!(dest.iter().all(|&b| b == 0xAB));
    assert_eq!(entropy.fill_count(), 1);
}

#[test]
fn test_mock_entropy_source_failure() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let mut dest = [0u8; 16];

    assert_eq!(
        entropy.fill_bytes(&mut dest),
        Err(EntropyError::EntropyNotAvailable)
    );

    entropy.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(entropy.fill_bytes(&mut dest).is_ok());
    assert_eq!(entropy.fill_count(), 2);
}
