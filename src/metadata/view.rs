//! Per-result-set metadata view.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::connect::MetadataOptions;
use crate::protocol::decode::decode_column_definitions;
use crate::protocol::types::{ColumnDescriptor, Nullability, ResolvedColumn};

use super::index::NameResolutionIndex;

/// Ordinal-indexed column metadata of one result set.
///
/// Immutable once built. All per-column accessors take a 1-based ordinal
/// and fail with [`Error::IndexOutOfRange`] outside `[1, count]`.
#[derive(Debug)]
pub struct ResultSetMetadata {
    columns: Vec<ResolvedColumn>,
    index: NameResolutionIndex,
}

impl ResultSetMetadata {
    /// Build from decoded descriptors, in ordinal order.
    pub fn from_descriptors(descriptors: Vec<ColumnDescriptor>, options: &MetadataOptions) -> Self {
        let columns = descriptors
            .into_iter()
            .enumerate()
            .map(|(i, desc)| ResolvedColumn::resolve(i + 1, desc, options))
            .collect();
        Self {
            columns,
            index: NameResolutionIndex::new(),
        }
    }

    /// Decode raw column definition records and build the view.
    ///
    /// Either every record decodes or nothing is built.
    pub fn from_column_definitions<I>(records: I, options: &MetadataOptions) -> Result<Self>
    where
        I: IntoIterator<Item = Bytes>,
    {
        let descriptors = decode_column_definitions(records)?;
        Ok(Self::from_descriptors(descriptors, options))
    }

    /// Number of columns.
    pub fn count(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in ordinal order.
    pub fn columns(&self) -> &[ResolvedColumn] {
        &self.columns
    }

    /// Resolved attributes of the column at `ordinal`.
    pub fn attributes_at(&self, ordinal: usize) -> Result<&ResolvedColumn> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .ok_or(Error::IndexOutOfRange {
                index: ordinal,
                count: self.columns.len(),
            })
    }

    /// Ordinal of an optionally table-qualified column name.
    pub fn find_ordinal(&self, name: &str) -> Result<usize> {
        self.index.find_ordinal(&self.columns, name)
    }

    /// Label requested by the query.
    pub fn column_label(&self, ordinal: usize) -> Result<&str> {
        Ok(self.attributes_at(ordinal)?.label())
    }

    /// Column name after the alias policy.
    pub fn column_name(&self, ordinal: usize) -> Result<&str> {
        Ok(&self.attributes_at(ordinal)?.effective_column_name)
    }

    /// Table name after the alias policy. Empty for computed columns.
    pub fn table_name(&self, ordinal: usize) -> Result<&str> {
        Ok(&self.attributes_at(ordinal)?.effective_table_name)
    }

    /// Catalog name, `def` on current servers.
    pub fn catalog_name(&self, ordinal: usize) -> Result<&str> {
        Ok(&self.attributes_at(ordinal)?.descriptor.catalog_name)
    }

    /// Schema (database) the column was read from. Empty for computed columns.
    pub fn schema_name(&self, ordinal: usize) -> Result<&str> {
        Ok(&self.attributes_at(ordinal)?.descriptor.schema_name)
    }

    /// SQL type code.
    pub fn column_type(&self, ordinal: usize) -> Result<i32> {
        Ok(self.attributes_at(ordinal)?.sql_type_code())
    }

    /// Server-style type name, e.g. `SMALLINT UNSIGNED`.
    pub fn column_type_name(&self, ordinal: usize) -> Result<&'static str> {
        Ok(self.attributes_at(ordinal)?.type_name)
    }

    /// Name of the value representation, e.g. `Integer`.
    pub fn column_class_name(&self, ordinal: usize) -> Result<&'static str> {
        Ok(self.attributes_at(ordinal)?.display_class_name)
    }

    /// Tri-state nullability.
    pub fn is_nullable(&self, ordinal: usize) -> Result<Nullability> {
        Ok(self.attributes_at(ordinal)?.nullability())
    }

    /// Whether the column is AUTO_INCREMENT.
    pub fn is_auto_increment(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_auto_increment)
    }

    /// Whether the column is part of a unique key.
    pub fn is_unique(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_unique())
    }

    /// Whether the column is part of the primary key.
    pub fn is_primary_key(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_primary_key())
    }

    /// Whether numeric values carry a sign.
    pub fn is_signed(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_signed())
    }

    /// Significant digits for DECIMAL, characters for text, declared length otherwise.
    pub fn precision(&self, ordinal: usize) -> Result<u32> {
        Ok(self.attributes_at(ordinal)?.precision())
    }

    /// Digits after the decimal point.
    pub fn scale(&self, ordinal: usize) -> Result<u8> {
        Ok(self.attributes_at(ordinal)?.scale())
    }

    /// Maximum display width in characters.
    pub fn display_size(&self, ordinal: usize) -> Result<u32> {
        Ok(self.attributes_at(ordinal)?.display_size())
    }

    /// Computed columns are read-only.
    pub fn is_read_only(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_read_only())
    }

    /// Inverse of [`is_read_only`](Self::is_read_only).
    pub fn is_writable(&self, ordinal: usize) -> Result<bool> {
        Ok(!self.is_read_only(ordinal)?)
    }

    /// Whether comparisons on the column are case sensitive.
    pub fn is_case_sensitive(&self, ordinal: usize) -> Result<bool> {
        Ok(self.attributes_at(ordinal)?.is_case_sensitive())
    }
}
