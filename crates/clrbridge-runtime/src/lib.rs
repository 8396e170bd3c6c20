//! Runtime support library for generated wrappers.
//!
//! Generated wrapper types do not own native values directly; they hold a
//! [`SharedBridge`] specialization that bridges native reference-counted
//! ownership into the managed runtime's deterministic-disposal model. This
//! crate is the only piece of clrbridge linked into generated code.

mod bridge;
mod handle;

pub use bridge::SharedBridge;
pub use handle::{NativeHandle, handle_count};

// Runtime errors live in the core crate's unified hierarchy.
pub use clrbridge_core::BridgeError;
