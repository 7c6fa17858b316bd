//! MariaDB/MySQL client/server protocol constants.
//!
//! Values follow the protocol-4.1 column definition packet layout.

// Field types (column definition `type` byte)
pub const MYSQL_TYPE_DECIMAL: u8 = 0;
pub const MYSQL_TYPE_TINY: u8 = 1;
pub const MYSQL_TYPE_SHORT: u8 = 2;
pub const MYSQL_TYPE_LONG: u8 = 3;
pub const MYSQL_TYPE_FLOAT: u8 = 4;
pub const MYSQL_TYPE_DOUBLE: u8 = 5;
pub const MYSQL_TYPE_NULL: u8 = 6;
pub const MYSQL_TYPE_TIMESTAMP: u8 = 7;
pub const MYSQL_TYPE_LONGLONG: u8 = 8;
pub const MYSQL_TYPE_INT24: u8 = 9;
pub const MYSQL_TYPE_DATE: u8 = 10;
pub const MYSQL_TYPE_TIME: u8 = 11;
pub const MYSQL_TYPE_DATETIME: u8 = 12;
pub const MYSQL_TYPE_YEAR: u8 = 13;
pub const MYSQL_TYPE_NEWDATE: u8 = 14;
pub const MYSQL_TYPE_VARCHAR: u8 = 15;
pub const MYSQL_TYPE_BIT: u8 = 16;
pub const MYSQL_TYPE_JSON: u8 = 245;
pub const MYSQL_TYPE_NEWDECIMAL: u8 = 246;
pub const MYSQL_TYPE_ENUM: u8 = 247;
pub const MYSQL_TYPE_SET: u8 = 248;
pub const MYSQL_TYPE_TINY_BLOB: u8 = 249;
pub const MYSQL_TYPE_MEDIUM_BLOB: u8 = 250;
pub const MYSQL_TYPE_LONG_BLOB: u8 = 251;
pub const MYSQL_TYPE_BLOB: u8 = 252;
pub const MYSQL_TYPE_VAR_STRING: u8 = 253;
pub const MYSQL_TYPE_STRING: u8 = 254;
pub const MYSQL_TYPE_GEOMETRY: u8 = 255;

// Placeholder for catalog types with no wire counterpart
pub const MYSQL_TYPE_INVALID: u8 = 243;

// Charsets
pub const BINARY_CHARSET_ID: u16 = 63;

// Length-encoded integer markers
pub const LENENC_NULL: u8 = 0xFB;
pub const LENENC_U16: u8 = 0xFC;
pub const LENENC_U24: u8 = 0xFD;
pub const LENENC_U64: u8 = 0xFE;
pub const LENENC_ERR: u8 = 0xFF;

/// Length of the fixed-size block following the names in a column definition.
pub const COLUMN_DEFINITION_FIXED_LENGTH: u64 = 0x0c;

/// Catalog name always sent by the server.
pub const DEFAULT_CATALOG: &str = "def";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3306;
