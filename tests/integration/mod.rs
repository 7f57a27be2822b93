//! Integration tests for the devnanny binary
//!
//! Run with: cargo test --features integration

mod helpers;

pub use helpers::*;
