// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock hash backend with failure injection and call counting.

mod hash_mock;

pub use hash_mock::{HashMock, HashMockBehaviour};
