// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sodalite_core
//!
//! Shared plumbing for the sodalite engines:
//!
//! - [`ParamError`]: precondition failures, detected before any primitive runs
//! - [`ProviderError`]: opaque failure reported by a primitive backend
//! - [`check_size`], [`check_size_min`], [`check_size_max`], [`check_in_range`]:
//!   boundary validation used by every engine operation
//! - [`init`] / [`capabilities`]: process-wide, init-once provider state
//!
//! Nothing in this crate touches key material.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod check;
mod error;
mod feature_detector;
mod init;
mod version;

pub use check::{check_in_range, check_size, check_size_max, check_size_min};
pub use error::{ParamError, ProviderError};
pub use init::{Capabilities, capabilities, init};
pub use version::{VERSION, library_version_major, library_version_minor, version_string};
