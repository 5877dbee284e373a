//! Observability subsystem.
//!
//! # Design Decisions
//! - Library code only emits `tracing` events; it never installs a
//!   subscriber
//! - Subscriber setup lives here and is called once by the binary
//! - Filter comes from RUST_LOG when set, config default otherwise

pub mod logging;
