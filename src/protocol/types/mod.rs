//! Column metadata data types.

mod column;
mod descriptor;
mod flags;
mod row;
mod standard_type;
mod wire_type;

pub use column::{Nullability, ResolvedColumn};
pub use descriptor::ColumnDescriptor;
pub use flags::ColumnFlags;
pub use row::Row;
pub use standard_type::StandardType;
pub use wire_type::WireType;
