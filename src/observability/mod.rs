//! Observability for the discovery tools
//!
//! Structured logging through `tracing`. The library only emits spans and
//! events; installing a subscriber is left to the binary or the host agent.

pub mod logging;

pub use logging::{init_default_logging, init_logging, level_from_verbosity, LogFormat};

// Span macros for structured logging
pub use logging::tool_span;
