//! Observability module
//!
//! Structured logging for devnanny via `tracing`.

pub mod telemetry;
