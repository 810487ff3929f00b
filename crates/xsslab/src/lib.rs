//! Top-level facade crate for the XSS lab.
//!
//! Re-exports the core policy engine and the server library so users can
//! depend on a single crate.

pub mod core {
    pub use xsslab_core::*;
}

pub mod server {
    pub use xsslab_server::*;
}
