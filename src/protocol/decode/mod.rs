//! Decoders for result-set header payloads.
//!
//! Row values are decoded by the caller; this module only turns column
//! definition records into descriptors.

mod column_definition;

pub use column_definition::{decode_column_definition, decode_column_definitions};
