//! Top-level facade crate for rcPrism.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use rcprism_core::*;
}

pub mod gateway {
    pub use rcprism_gateway::*;
}
