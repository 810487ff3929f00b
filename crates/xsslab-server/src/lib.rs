//! xsslab server library entry.
//!
//! This crate wires the HTTP surface around the core policy engine: config
//! loading, the page composer, and the axum router/handlers. It is consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod pages;
pub mod render;
pub mod router;
