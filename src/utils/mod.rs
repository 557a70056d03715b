//! Browser helpers shared by the components.
//!
//! Provides:
//! - [`dom`] - element lookup, attributes, visibility and listeners
//! - [`log`] - `tracing` events forwarded to the browser console

pub mod dom;
pub mod log;
#[cfg(all(test, target_arch = "wasm32"))]
pub mod testing;
