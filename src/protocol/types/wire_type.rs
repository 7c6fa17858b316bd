//! Server-native column types as sent on the wire.

use crate::protocol::constants::*;

/// Native column type from a column definition's type byte.
///
/// Codes with no variant are kept as `Unknown` and classify to OTHER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Decimal,
    Tiny,
    Short,
    Long,
    Float,
    Double,
    Null,
    Timestamp,
    LongLong,
    Int24,
    Date,
    Time,
    DateTime,
    Year,
    NewDate,
    Varchar,
    Bit,
    Json,
    NewDecimal,
    Enum,
    Set,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    VarString,
    String,
    Geometry,
    Unknown(u8),
}

impl WireType {
    /// Create from the raw type byte.
    pub fn from_code(code: u8) -> Self {
        match code {
            MYSQL_TYPE_DECIMAL => WireType::Decimal,
            MYSQL_TYPE_TINY => WireType::Tiny,
            MYSQL_TYPE_SHORT => WireType::Short,
            MYSQL_TYPE_LONG => WireType::Long,
            MYSQL_TYPE_FLOAT => WireType::Float,
            MYSQL_TYPE_DOUBLE => WireType::Double,
            MYSQL_TYPE_NULL => WireType::Null,
            MYSQL_TYPE_TIMESTAMP => WireType::Timestamp,
            MYSQL_TYPE_LONGLONG => WireType::LongLong,
            MYSQL_TYPE_INT24 => WireType::Int24,
            MYSQL_TYPE_DATE => WireType::Date,
            MYSQL_TYPE_TIME => WireType::Time,
            MYSQL_TYPE_DATETIME => WireType::DateTime,
            MYSQL_TYPE_YEAR => WireType::Year,
            MYSQL_TYPE_NEWDATE => WireType::NewDate,
            MYSQL_TYPE_VARCHAR => WireType::Varchar,
            MYSQL_TYPE_BIT => WireType::Bit,
            MYSQL_TYPE_JSON => WireType::Json,
            MYSQL_TYPE_NEWDECIMAL => WireType::NewDecimal,
            MYSQL_TYPE_ENUM => WireType::Enum,
            MYSQL_TYPE_SET => WireType::Set,
            MYSQL_TYPE_TINY_BLOB => WireType::TinyBlob,
            MYSQL_TYPE_MEDIUM_BLOB => WireType::MediumBlob,
            MYSQL_TYPE_LONG_BLOB => WireType::LongBlob,
            MYSQL_TYPE_BLOB => WireType::Blob,
            MYSQL_TYPE_VAR_STRING => WireType::VarString,
            MYSQL_TYPE_STRING => WireType::String,
            MYSQL_TYPE_GEOMETRY => WireType::Geometry,
            other => WireType::Unknown(other),
        }
    }

    /// Create from a catalog DATA_TYPE name such as `"smallint"`.
    ///
    /// Returns `None` for names with no wire counterpart.
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        let t = match name.to_ascii_lowercase().as_str() {
            "tinyint" | "bool" | "boolean" => WireType::Tiny,
            "smallint" => WireType::Short,
            "mediumint" => WireType::Int24,
            "int" | "integer" => WireType::Long,
            "bigint" => WireType::LongLong,
            "float" => WireType::Float,
            "double" | "real" => WireType::Double,
            "decimal" | "numeric" => WireType::NewDecimal,
            "date" => WireType::Date,
            "time" => WireType::Time,
            "datetime" => WireType::DateTime,
            "timestamp" => WireType::Timestamp,
            "year" => WireType::Year,
            "bit" => WireType::Bit,
            "char" | "binary" => WireType::String,
            "varchar" | "varbinary" => WireType::VarString,
            "tinytext" | "tinyblob" => WireType::TinyBlob,
            "text" | "blob" => WireType::Blob,
            "mediumtext" | "mediumblob" => WireType::MediumBlob,
            "longtext" | "longblob" => WireType::LongBlob,
            "json" => WireType::Json,
            "enum" => WireType::Enum,
            "set" => WireType::Set,
            "geometry" | "point" | "linestring" | "polygon" | "multipoint"
            | "multilinestring" | "multipolygon" | "geometrycollection" => WireType::Geometry,
            _ => return None,
        };
        Some(t)
    }

    /// Get the raw type byte.
    pub fn code(&self) -> u8 {
        match self {
            WireType::Decimal => MYSQL_TYPE_DECIMAL,
            WireType::Tiny => MYSQL_TYPE_TINY,
            WireType::Short => MYSQL_TYPE_SHORT,
            WireType::Long => MYSQL_TYPE_LONG,
            WireType::Float => MYSQL_TYPE_FLOAT,
            WireType::Double => MYSQL_TYPE_DOUBLE,
            WireType::Null => MYSQL_TYPE_NULL,
            WireType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            WireType::LongLong => MYSQL_TYPE_LONGLONG,
            WireType::Int24 => MYSQL_TYPE_INT24,
            WireType::Date => MYSQL_TYPE_DATE,
            WireType::Time => MYSQL_TYPE_TIME,
            WireType::DateTime => MYSQL_TYPE_DATETIME,
            WireType::Year => MYSQL_TYPE_YEAR,
            WireType::NewDate => MYSQL_TYPE_NEWDATE,
            WireType::Varchar => MYSQL_TYPE_VARCHAR,
            WireType::Bit => MYSQL_TYPE_BIT,
            WireType::Json => MYSQL_TYPE_JSON,
            WireType::NewDecimal => MYSQL_TYPE_NEWDECIMAL,
            WireType::Enum => MYSQL_TYPE_ENUM,
            WireType::Set => MYSQL_TYPE_SET,
            WireType::TinyBlob => MYSQL_TYPE_TINY_BLOB,
            WireType::MediumBlob => MYSQL_TYPE_MEDIUM_BLOB,
            WireType::LongBlob => MYSQL_TYPE_LONG_BLOB,
            WireType::Blob => MYSQL_TYPE_BLOB,
            WireType::VarString => MYSQL_TYPE_VAR_STRING,
            WireType::String => MYSQL_TYPE_STRING,
            WireType::Geometry => MYSQL_TYPE_GEOMETRY,
            WireType::Unknown(code) => *code,
        }
    }

    /// BLOB/TEXT family.
    pub fn is_blob(&self) -> bool {
        matches!(
            self,
            WireType::TinyBlob | WireType::MediumBlob | WireType::LongBlob | WireType::Blob
        )
    }
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireType::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => write!(f, "{:?}", other),
        }
    }
}
