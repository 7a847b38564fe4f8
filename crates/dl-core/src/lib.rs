//! # dl-core
//!
//! Core types, error definitions, and settings for the deadline workspace.
//!
//! This crate provides the foundational building blocks shared by the other
//! crates in the workspace: type aliases, the error enum with its `ensure!`
//! macro, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type and the `ensure!` macro.
pub mod errors;

/// Global settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for day serials and day differences.
pub type Integer = i32;

/// Non-negative integer used for day counts.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
