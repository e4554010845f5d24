//! # tr-core
//!
//! Core types and definitions for toolrental.
//!
//! This crate provides the building blocks shared across the workspace –
//! the error type, the `ensure!` validation macro, and exact-decimal money
//! utilities (rounding conventions and en-US currency formatting).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Exact-decimal money utilities: rounding conventions and formatting.
pub mod money;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use money::{format_usd, round, Rounding};

/// Exact fixed-point decimal used for every monetary value in the workspace.
pub use rust_decimal::Decimal;
