//! Query payloads handed to the degradation engine
//!
//! The engine never inspects caller data beyond extracting a query string.

mod payload;

pub use payload::{BusinessRecord, QueryPayload};
