// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide, init-once provider state.
//!
//! The CPU capability probe runs exactly once per process. Engines call
//! [`capabilities`] lazily; applications may call [`init`] at startup.
//! There is no teardown.

use std::sync::OnceLock;

use crate::feature_detector::FeatureDetector;
use crate::version::VERSION;

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

/// Hardware capabilities relevant to the primitive backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// AES and carry-less multiplication instructions are available, so
    /// AES-256-GCM runs on the hardware-accelerated path.
    pub aes_gcm_accelerated: bool,
}

impl Capabilities {
    pub(crate) fn probe(detector: &FeatureDetector) -> Self {
        Self {
            aes_gcm_accelerated: detector.has_aes_clmul(),
        }
    }
}

fn initialize() -> Capabilities {
    let capabilities = Capabilities::probe(&FeatureDetector::new());

    tracing::debug!(
        version = VERSION,
        aes_gcm_accelerated = capabilities.aes_gcm_accelerated,
        "sodalite provider initialized"
    );

    capabilities
}

/// Initializes the provider state.
///
/// Idempotent and thread-safe. Returns `true` if this call performed the
/// initialization, `false` if it had already happened.
pub fn init() -> bool {
    let mut performed = false;

    CAPABILITIES.get_or_init(|| {
        performed = true;
        initialize()
    });

    performed
}

/// Returns the cached capabilities, initializing on first use.
#[inline]
pub fn capabilities() -> Capabilities {
    *CAPABILITIES.get_or_init(initialize)
}
