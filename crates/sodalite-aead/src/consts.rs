// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256-GCM size constants.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Public nonce size in bytes
pub const NONCE_SIZE: usize = 12;

/// Secret nonce size in bytes (unsupported, always zero)
pub const NSEC_SIZE: usize = 0;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Maximum message length for a single invocation: 16 * (2^32 - 2) bytes
pub const MESSAGE_MAX: u64 = 16 * ((1 << 32) - 2);

/// Primitive name
pub const PRIMITIVE: &str = "aes256gcm";
