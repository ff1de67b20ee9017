//! Execution engine.
//!
//! Capability probing, one-time kernel dispatch, and the sponge core.

pub mod cpu;
pub mod dispatcher;
pub mod sponge;
