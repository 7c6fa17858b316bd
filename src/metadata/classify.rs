//! Type classification of column descriptors.
//!
//! Classification is a pure function of the descriptor: the wire type
//! picks a base [`StandardType`], then charset and flag refinements are
//! applied. Catalog reports go through the same functions so the two
//! paths cannot disagree.

use crate::protocol::types::{ColumnDescriptor, ColumnFlags, StandardType, WireType};

/// Result of classifying one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Abstract SQL type.
    pub standard_type: StandardType,
    /// Name of the value representation callers receive.
    pub class_name: &'static str,
    /// Server-style type name, e.g. `SMALLINT UNSIGNED`.
    pub type_name: &'static str,
}

/// Classify a column descriptor.
pub fn classify(desc: &ColumnDescriptor) -> Classification {
    let wire = desc.wire_type();
    let standard_type = standard_type(desc);
    Classification {
        standard_type,
        class_name: class_name(standard_type, desc),
        type_name: type_name(wire, standard_type, desc),
    }
}

fn base_type(wire: WireType) -> StandardType {
    match wire {
        WireType::Tiny => StandardType::TinyInt,
        WireType::Short => StandardType::SmallInt,
        WireType::Int24 | WireType::Long => StandardType::Integer,
        WireType::LongLong => StandardType::BigInt,
        WireType::Float => StandardType::Real,
        WireType::Double => StandardType::Double,
        WireType::Decimal | WireType::NewDecimal => StandardType::Decimal,
        WireType::Null => StandardType::Null,
        WireType::Date | WireType::NewDate | WireType::Year => StandardType::Date,
        WireType::Time => StandardType::Time,
        WireType::Timestamp | WireType::DateTime => StandardType::Timestamp,
        WireType::Bit => StandardType::Bit,
        WireType::Varchar | WireType::VarString => StandardType::Varchar,
        WireType::String | WireType::Enum | WireType::Set => StandardType::Char,
        WireType::TinyBlob
        | WireType::MediumBlob
        | WireType::LongBlob
        | WireType::Blob
        | WireType::Json => StandardType::LongVarchar,
        WireType::Geometry => StandardType::Binary,
        WireType::Unknown(_) => StandardType::Other,
    }
}

/// Final standard type after charset and flag refinements.
pub fn standard_type(desc: &ColumnDescriptor) -> StandardType {
    let wire = desc.wire_type();
    let base = base_type(wire);

    let is_string_wire = matches!(
        wire,
        WireType::String | WireType::VarString | WireType::Varchar
    );
    // ENUM and SET values are strings regardless of collation.
    if is_string_wire && desc.flags.intersects(ColumnFlags::ENUM | ColumnFlags::SET) {
        return StandardType::Char;
    }
    if matches!(wire, WireType::Enum | WireType::Set | WireType::Json) {
        return base;
    }

    let base = if is_string_wire && desc.flags.contains(ColumnFlags::BLOB) {
        StandardType::LongVarchar
    } else {
        base
    };

    if desc.is_binary() {
        match base {
            StandardType::Char => StandardType::Binary,
            StandardType::Varchar => StandardType::Varbinary,
            StandardType::LongVarchar => StandardType::LongVarbinary,
            other => other,
        }
    } else {
        base
    }
}

/// Name of the value representation for a column.
///
/// Unsigned INTEGER and BIGINT need the next wider container; narrower
/// unsigned integers still fit in `Integer`.
pub fn class_name(standard_type: StandardType, desc: &ColumnDescriptor) -> &'static str {
    let unsigned = desc.flags.contains(ColumnFlags::UNSIGNED);
    match standard_type {
        StandardType::Bit if desc.declared_length <= 1 => "Boolean",
        StandardType::Bit => "byte[]",
        StandardType::TinyInt | StandardType::SmallInt => "Integer",
        StandardType::Integer if unsigned && desc.wire_type() == WireType::Long => "Long",
        StandardType::Integer => "Integer",
        StandardType::BigInt if unsigned => "BigInteger",
        StandardType::BigInt => "Long",
        StandardType::Real => "Float",
        StandardType::Double => "Double",
        StandardType::Decimal => "BigDecimal",
        StandardType::Char | StandardType::Varchar | StandardType::LongVarchar => "String",
        StandardType::Binary | StandardType::Varbinary | StandardType::LongVarbinary => "byte[]",
        StandardType::Date => "Date",
        StandardType::Time => "Time",
        StandardType::Timestamp => "Timestamp",
        StandardType::Null | StandardType::Other => "Object",
    }
}

fn type_name(wire: WireType, standard_type: StandardType, desc: &ColumnDescriptor) -> &'static str {
    let unsigned = desc.flags.contains(ColumnFlags::UNSIGNED);
    let binary = standard_type.is_binary();
    match wire {
        WireType::Tiny if unsigned => "TINYINT UNSIGNED",
        WireType::Tiny => "TINYINT",
        WireType::Short if unsigned => "SMALLINT UNSIGNED",
        WireType::Short => "SMALLINT",
        WireType::Int24 if unsigned => "MEDIUMINT UNSIGNED",
        WireType::Int24 => "MEDIUMINT",
        WireType::Long if unsigned => "INTEGER UNSIGNED",
        WireType::Long => "INTEGER",
        WireType::LongLong if unsigned => "BIGINT UNSIGNED",
        WireType::LongLong => "BIGINT",
        WireType::Float => "FLOAT",
        WireType::Double => "DOUBLE",
        WireType::Decimal | WireType::NewDecimal => "DECIMAL",
        WireType::Null => "NULL",
        WireType::Timestamp => "TIMESTAMP",
        WireType::Date | WireType::NewDate => "DATE",
        WireType::Time => "TIME",
        WireType::DateTime => "DATETIME",
        WireType::Year => "YEAR",
        WireType::Bit => "BIT",
        WireType::Json => "JSON",
        WireType::Enum => "ENUM",
        WireType::Set => "SET",
        WireType::Geometry => "GEOMETRY",
        WireType::String | WireType::VarString | WireType::Varchar => {
            if desc.flags.contains(ColumnFlags::ENUM) {
                "ENUM"
            } else if desc.flags.contains(ColumnFlags::SET) {
                "SET"
            } else {
                match standard_type {
                    StandardType::Binary => "BINARY",
                    StandardType::Varbinary => "VARBINARY",
                    StandardType::Char => "CHAR",
                    StandardType::LongVarchar | StandardType::LongVarbinary => {
                        blob_name(blob_length(desc, binary), binary)
                    }
                    _ => "VARCHAR",
                }
            }
        }
        WireType::TinyBlob => blob_name(0xFF, binary),
        WireType::MediumBlob => blob_name(0xFF_FFFF, binary),
        WireType::LongBlob => blob_name(u32::MAX, binary),
        WireType::Blob => blob_name(blob_length(desc, binary), binary),
        WireType::Unknown(_) => "UNKNOWN",
    }
}

/// Text blob sizes are declared in characters, binary ones in bytes.
fn blob_length(desc: &ColumnDescriptor, binary: bool) -> u32 {
    if binary {
        desc.declared_length
    } else {
        desc.char_length()
    }
}

fn blob_name(length: u32, binary: bool) -> &'static str {
    match (length, binary) {
        (0..=0xFF, true) => "TINYBLOB",
        (0..=0xFF, false) => "TINYTEXT",
        (0..=0xFFFF, true) => "BLOB",
        (0..=0xFFFF, false) => "TEXT",
        (0..=0xFF_FFFF, true) => "MEDIUMBLOB",
        (0..=0xFF_FFFF, false) => "MEDIUMTEXT",
        (_, true) => "LONGBLOB",
        (_, false) => "LONGTEXT",
    }
}

/// Whether values of this column carry a sign.
pub fn is_signed(standard_type: StandardType, desc: &ColumnDescriptor) -> bool {
    standard_type.is_numeric() && !desc.flags.contains(ColumnFlags::UNSIGNED)
}

/// Inclusive value range of an integer column, widened for UNSIGNED.
///
/// `None` for non-integer columns.
pub fn integer_range(desc: &ColumnDescriptor) -> Option<(i128, i128)> {
    let unsigned = desc.flags.contains(ColumnFlags::UNSIGNED);
    let bits = match desc.wire_type() {
        WireType::Tiny => 8,
        WireType::Short => 16,
        WireType::Int24 => 24,
        WireType::Long => 32,
        WireType::LongLong => 64,
        _ => return None,
    };
    if unsigned {
        Some((0, (1i128 << bits) - 1))
    } else {
        Some((-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1))
    }
}

/// Column precision: significant digits for DECIMAL, characters for text,
/// declared length otherwise.
pub fn precision(standard_type: StandardType, desc: &ColumnDescriptor) -> u32 {
    match standard_type {
        StandardType::Decimal => {
            let sign = u32::from(!desc.flags.contains(ColumnFlags::UNSIGNED));
            let point = u32::from(desc.decimal_scale > 0);
            desc.declared_length.saturating_sub(sign + point)
        }
        t if t.is_text() => desc.char_length(),
        _ => desc.declared_length,
    }
}

/// Maximum display width in characters.
pub fn display_size(standard_type: StandardType, desc: &ColumnDescriptor) -> u32 {
    if standard_type.is_text() {
        desc.char_length()
    } else {
        desc.declared_length
    }
}
