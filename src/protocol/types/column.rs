//! Resolved column type for the user-facing metadata API.
//!
//! A `ResolvedColumn` owns its wire descriptor and carries the results of
//! type classification and alias resolution.

use crate::metadata::alias::resolve_names;
use crate::metadata::classify;
use crate::protocol::connect::MetadataOptions;

use super::descriptor::ColumnDescriptor;
use super::flags::ColumnFlags;
use super::standard_type::StandardType;

/// Nullability of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// Column never holds NULL.
    NoNulls,
    /// Column may hold NULL.
    Nullable,
    /// Server gave no nullability information.
    Unknown,
}

impl Nullability {
    /// `ResultSetMetaData`-style code: 0 no nulls, 1 nullable, 2 unknown.
    pub fn code(&self) -> i32 {
        match self {
            Nullability::NoNulls => 0,
            Nullability::Nullable => 1,
            Nullability::Unknown => 2,
        }
    }
}

/// A column in a result set, with resolved type and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// 1-based position in the result set.
    pub ordinal: usize,
    /// Raw wire descriptor.
    pub descriptor: ColumnDescriptor,
    /// Classified SQL type.
    pub standard_type: StandardType,
    /// Name of the value representation, e.g. `Integer`.
    pub display_class_name: &'static str,
    /// Server-style type name, e.g. `SMALLINT UNSIGNED`.
    pub type_name: &'static str,
    /// Table name returned to callers after the alias policy.
    pub effective_table_name: String,
    /// Column name returned to callers after the alias policy.
    pub effective_column_name: String,
    /// Whether NULL values are allowed.
    pub is_nullable: bool,
    /// Whether the column is AUTO_INCREMENT.
    pub is_auto_increment: bool,
}

impl ResolvedColumn {
    /// Resolve a descriptor at `ordinal` (1-based).
    pub fn resolve(ordinal: usize, descriptor: ColumnDescriptor, options: &MetadataOptions) -> Self {
        let class = classify::classify(&descriptor);
        let names = resolve_names(&descriptor, options.legacy_alias_metadata);
        Self {
            ordinal,
            standard_type: class.standard_type,
            display_class_name: class.class_name,
            type_name: class.type_name,
            effective_table_name: names.table_name,
            effective_column_name: names.column_name,
            is_nullable: !descriptor.flags.contains(ColumnFlags::NOT_NULL),
            is_auto_increment: descriptor.flags.contains(ColumnFlags::AUTO_INCREMENT),
            descriptor,
        }
    }

    /// Label requested by the query. Independent of the alias policy.
    pub fn label(&self) -> &str {
        &self.descriptor.column_label
    }

    /// SQL type code.
    pub fn sql_type_code(&self) -> i32 {
        self.standard_type.sql_type_code()
    }

    /// Tri-state nullability.
    ///
    /// Computed columns without NOT_NULL report `Unknown`: the server has
    /// no stored column to take the constraint from.
    pub fn nullability(&self) -> Nullability {
        if !self.is_nullable {
            Nullability::NoNulls
        } else if self.descriptor.has_origin() {
            Nullability::Nullable
        } else {
            Nullability::Unknown
        }
    }

    pub fn is_unique(&self) -> bool {
        self.descriptor.flags.contains(ColumnFlags::UNIQUE_KEY)
    }

    pub fn is_primary_key(&self) -> bool {
        self.descriptor.flags.contains(ColumnFlags::PRIMARY_KEY)
    }

    pub fn is_signed(&self) -> bool {
        classify::is_signed(self.standard_type, &self.descriptor)
    }

    pub fn precision(&self) -> u32 {
        classify::precision(self.standard_type, &self.descriptor)
    }

    pub fn scale(&self) -> u8 {
        self.descriptor.decimal_scale
    }

    pub fn display_size(&self) -> u32 {
        classify::display_size(self.standard_type, &self.descriptor)
    }

    /// Inclusive value range for integer columns.
    pub fn integer_range(&self) -> Option<(i128, i128)> {
        classify::integer_range(&self.descriptor)
    }

    /// Computed columns cannot be written back.
    pub fn is_read_only(&self) -> bool {
        !self.descriptor.has_origin()
    }

    /// Binary comparisons are case sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.descriptor.is_binary() || self.descriptor.flags.contains(ColumnFlags::BINARY)
    }
}
