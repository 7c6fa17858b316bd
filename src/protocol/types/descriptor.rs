//! Column descriptor decoded from one column definition record.
//!
//! This struct preserves the raw wire data. Resolved, caller-facing
//! attributes live in `ResolvedColumn`.

use bytes::Bytes;

use crate::protocol::buffer::WriteBuffer;
use crate::protocol::charset;
use crate::protocol::constants::{COLUMN_DEFINITION_FIXED_LENGTH, DEFAULT_CATALOG};

use super::flags::ColumnFlags;
use super::wire_type::WireType;

/// Column descriptor from wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    /// Native type byte.
    pub wire_type_code: u8,
    /// Declared column length in bytes.
    pub declared_length: u32,
    /// Number of decimals.
    pub decimal_scale: u8,
    /// Flag bits.
    pub flags: ColumnFlags,
    /// Catalog name (always `def` on current servers).
    pub catalog_name: String,
    /// Schema (database) name.
    pub schema_name: String,
    /// Table alias as written in the query.
    pub table_name: String,
    /// Underlying table, empty for computed columns.
    pub origin_table_name: String,
    /// Column alias as requested by the query.
    pub column_label: String,
    /// Underlying column, empty for computed columns.
    pub origin_column_name: String,
    /// Collation id; 63 is binary.
    pub charset_id: u16,
}

impl ColumnDescriptor {
    /// Create a computed column descriptor with minimal info.
    pub fn new(column_label: impl Into<String>, wire_type: WireType) -> Self {
        Self {
            wire_type_code: wire_type.code(),
            declared_length: 0,
            decimal_scale: 0,
            flags: ColumnFlags::empty(),
            catalog_name: DEFAULT_CATALOG.to_string(),
            schema_name: String::new(),
            table_name: String::new(),
            origin_table_name: String::new(),
            column_label: column_label.into(),
            origin_column_name: String::new(),
            charset_id: crate::protocol::constants::BINARY_CHARSET_ID,
        }
    }

    /// Set provenance for a direct reference to a stored column.
    pub fn with_origin(
        mut self,
        schema: impl Into<String>,
        table_alias: impl Into<String>,
        origin_table: impl Into<String>,
        origin_column: impl Into<String>,
    ) -> Self {
        self.schema_name = schema.into();
        self.table_name = table_alias.into();
        self.origin_table_name = origin_table.into();
        self.origin_column_name = origin_column.into();
        self
    }

    /// Set declared length and decimals.
    pub fn with_length(mut self, declared_length: u32, decimal_scale: u8) -> Self {
        self.declared_length = declared_length;
        self.decimal_scale = decimal_scale;
        self
    }

    /// Set flag bits.
    pub fn with_flags(mut self, flags: ColumnFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set collation id.
    pub fn with_charset(mut self, charset_id: u16) -> Self {
        self.charset_id = charset_id;
        self
    }

    /// Native column type.
    pub fn wire_type(&self) -> WireType {
        WireType::from_code(self.wire_type_code)
    }

    /// Whether this column is a direct reference to a stored column.
    pub fn has_origin(&self) -> bool {
        !self.origin_table_name.is_empty()
    }

    /// Whether the column uses the binary pseudo-charset.
    pub fn is_binary(&self) -> bool {
        charset::is_binary(self.charset_id)
    }

    /// Declared length in characters for text columns.
    pub fn char_length(&self) -> u32 {
        self.declared_length / charset::max_bytes_per_char(self.charset_id)
    }

    /// Encode as a column definition payload.
    pub fn encode(&self) -> Bytes {
        let mut buf = WriteBuffer::new();
        self.write_to(&mut buf);
        buf.freeze()
    }

    /// Write the column definition payload into `buf`.
    pub fn write_to(&self, buf: &mut WriteBuffer) {
        buf.write_lenenc_str(&self.catalog_name);
        buf.write_lenenc_str(&self.schema_name);
        buf.write_lenenc_str(&self.table_name);
        buf.write_lenenc_str(&self.origin_table_name);
        buf.write_lenenc_str(&self.column_label);
        buf.write_lenenc_str(&self.origin_column_name);
        buf.write_lenenc_int(COLUMN_DEFINITION_FIXED_LENGTH);
        buf.write_u16_le(self.charset_id);
        buf.write_u32_le(self.declared_length);
        buf.write_u8(self.wire_type_code);
        buf.write_u16_le(self.flags.bits());
        buf.write_u8(self.decimal_scale);
        buf.write_zeros(2);
    }
}
