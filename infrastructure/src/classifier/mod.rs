//! Primary classifier adapters.

mod scripted;

pub use scripted::{ScriptedClassifier, ScriptedResponse};
