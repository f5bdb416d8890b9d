//! Application-level configuration.
//!
//! - [`EngineParams`]: primary operation deadline and diagnostic limits

pub mod engine_params;

pub use engine_params::EngineParams;
