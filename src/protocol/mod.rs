//! MariaDB/MySQL client protocol pieces used to build result-set metadata.

pub mod buffer;
pub mod charset;
pub mod connect;
pub mod constants;
pub mod decode;
pub mod types;

pub use buffer::{ReadBuffer, WriteBuffer};
pub use connect::{ConnectParams, MetadataOptions};
pub use decode::{decode_column_definition, decode_column_definitions};
pub use types::{
    ColumnDescriptor, ColumnFlags, Nullability, ResolvedColumn, Row, StandardType, WireType,
};
