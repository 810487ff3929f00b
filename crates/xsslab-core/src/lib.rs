//! xsslab core: the escaping/rendering policy engine behind the XSS lab.
//!
//! This crate defines the pure text transformations (entity encoding, the
//! deliberately weak comment filter) and the level policy table binding each
//! difficulty to its filter/escape pair. It intentionally carries no HTTP or
//! runtime dependencies so the server and tests can consume it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every transformation is total over arbitrary string input; the only
//! fallible path is level resolution, which surfaces as `LabError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod encode;
pub mod error;
pub mod level;

/// Shared result type.
pub use error::{LabError, Result};
