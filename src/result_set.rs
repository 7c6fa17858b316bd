//! Result sets: resolved column metadata plus the rows that share it.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::Result;
use crate::metadata::ResultSetMetadata;
use crate::protocol::connect::MetadataOptions;
use crate::protocol::types::Row;

/// A result set received from the server.
///
/// Owns its metadata exclusively; dropping the result set (or replacing
/// it with the next statement's) discards the metadata and its name index.
#[derive(Debug)]
pub struct ResultSet {
    metadata: Arc<ResultSetMetadata>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// Build from the raw column definition records and text-protocol row
    /// payloads of one response.
    ///
    /// # Example
    ///
    /// ```
    /// use colmeta::{ColumnDescriptor, MetadataOptions, ResultSet, WireType};
    ///
    /// let id = ColumnDescriptor::new("id", WireType::Long).with_origin("db", "t1", "t1", "id");
    /// let rs = ResultSet::from_column_definitions(
    ///     vec![id.encode()],
    ///     Vec::new(),
    ///     &MetadataOptions::default(),
    /// )?;
    /// assert_eq!(rs.find_column("t1.id")?, 1);
    /// # Ok::<(), colmeta::Error>(())
    /// ```
    pub fn from_column_definitions<C, R>(
        column_definitions: C,
        row_payloads: R,
        options: &MetadataOptions,
    ) -> Result<Self>
    where
        C: IntoIterator<Item = Bytes>,
        R: IntoIterator<Item = Bytes>,
    {
        let metadata = Arc::new(ResultSetMetadata::from_column_definitions(
            column_definitions,
            options,
        )?);
        let rows = row_payloads
            .into_iter()
            .map(|payload| Row::decode_text(payload, Arc::clone(&metadata)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { metadata, rows })
    }

    /// Column metadata.
    pub fn metadata(&self) -> &ResultSetMetadata {
        &self.metadata
    }

    /// Ordinal of an optionally table-qualified column name.
    pub fn find_column(&self, name: &str) -> Result<usize> {
        self.metadata.find_ordinal(name)
    }

    /// Rows returned.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column labels in ordinal order.
    pub fn column_labels(&self) -> Vec<&str> {
        self.metadata.columns().iter().map(|c| c.label()).collect()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
