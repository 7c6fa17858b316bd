//! Column metadata resolution for a MariaDB/MySQL client.
//!
//! Turns the column definition records of a query response into an
//! ordinal-indexed metadata model (type, nullability, auto-increment,
//! display class, origin table/column, alias) and resolves column names,
//! optionally table-qualified, to ordinals.
//!
//! # Example
//!
//! ```
//! use colmeta::{ColumnDescriptor, ConnectParams, ResultSetMetadata, WireType};
//!
//! // SELECT id AS id_alias FROM t3 AS t1_alias
//! let record = ColumnDescriptor::new("id_alias", WireType::Long)
//!     .with_origin("test", "t1_alias", "t3", "id")
//!     .encode();
//!
//! let params = ConnectParams::parse("mariadb://localhost/test")?;
//! let metadata = ResultSetMetadata::from_column_definitions(vec![record], &params.metadata)?;
//!
//! assert_eq!(metadata.column_label(1)?, "id_alias");
//! assert_eq!(metadata.column_name(1)?, "id");
//! assert_eq!(metadata.table_name(1)?, "t3");
//! # Ok::<(), colmeta::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod metadata;
pub mod protocol;
pub mod result_set;

// Re-export main types
pub use catalog::{list_columns, CatalogColumn, ColumnReport};
pub use error::{Error, Result};
pub use metadata::ResultSetMetadata;
pub use protocol::connect::{ConnectParams, MetadataOptions};
pub use protocol::types::{
    ColumnDescriptor, ColumnFlags, Nullability, ResolvedColumn, Row, StandardType, WireType,
};
pub use result_set::ResultSet;
