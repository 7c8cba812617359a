// Adapters layer: concrete implementations for external systems.

pub mod http;
#[cfg(feature = "lambda")]
pub mod lambda;
