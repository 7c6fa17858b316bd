//! Column metadata resolution: classification, alias policy, the
//! per-result-set view and name lookup.

pub mod alias;
pub mod classify;
mod index;
mod view;

pub use alias::{resolve_names, ResolvedNames};
pub use classify::{classify, Classification};
pub use view::ResultSetMetadata;
