//! Shared CLI infrastructure for the registry packer.
//!
//! The binary itself lives in `main.rs`; this library only exposes the
//! logging setup so it can be reused from tests.

pub mod logging;
