//! Row type for query results.

use std::borrow::Cow;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::metadata::ResultSetMetadata;
use crate::protocol::buffer::ReadBuffer;

/// A row of raw text-protocol values.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values, `None` for SQL NULL.
    values: Vec<Option<Bytes>>,
    /// Shared column metadata (reference counted).
    metadata: Arc<ResultSetMetadata>,
}

impl Row {
    /// Create a new row with values and shared metadata.
    pub fn new(values: Vec<Option<Bytes>>, metadata: Arc<ResultSetMetadata>) -> Self {
        Self { values, metadata }
    }

    /// Split a text-protocol row payload into one value per column.
    pub fn decode_text(payload: Bytes, metadata: Arc<ResultSetMetadata>) -> Result<Self> {
        let mut buf = ReadBuffer::new(payload);
        let mut values = Vec::with_capacity(metadata.count());
        for ordinal in 1..=metadata.count() {
            let value = buf
                .read_lenenc_bytes()
                .map_err(|e| Error::protocol(ordinal, format!("row value: {}", e)))?;
            values.push(value);
        }
        if buf.remaining() != 0 {
            return Err(Error::protocol(
                metadata.count(),
                format!("{} trailing bytes after last row value", buf.remaining()),
            ));
        }
        Ok(Self::new(values, metadata))
    }

    /// Raw value at `ordinal` (1-based). `Ok(None)` for NULL.
    pub fn get(&self, ordinal: usize) -> Result<Option<&[u8]>> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .map(|v| v.as_deref())
            .ok_or(Error::IndexOutOfRange {
                index: ordinal,
                count: self.values.len(),
            })
    }

    /// Raw value by optionally table-qualified column name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<&[u8]>> {
        let ordinal = self.metadata.find_ordinal(name)?;
        self.get(ordinal)
    }

    /// Value at `ordinal` as text (lossy UTF-8).
    pub fn get_str(&self, ordinal: usize) -> Result<Option<Cow<'_, str>>> {
        Ok(self.get(ordinal)?.map(String::from_utf8_lossy))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Column metadata shared by all rows of the result set.
    pub fn metadata(&self) -> &ResultSetMetadata {
        &self.metadata
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = Option<&[u8]>> {
        self.values.iter().map(|v| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::buffer::WriteBuffer;
    use crate::protocol::connect::MetadataOptions;
    use crate::protocol::types::{ColumnDescriptor, WireType};

    fn make_metadata() -> Arc<ResultSetMetadata> {
        Arc::new(ResultSetMetadata::from_descriptors(
            vec![
                ColumnDescriptor::new("name", WireType::VarString).with_origin("db", "t", "t", "name"),
                ColumnDescriptor::new("value", WireType::Long).with_origin("db", "t", "t", "value"),
            ],
            &MetadataOptions::default(),
        ))
    }

    #[test]
    fn test_decode_text_row() {
        let mut buf = WriteBuffer::new();
        buf.write_lenenc_str("test");
        buf.write_null();
        let row = Row::decode_text(buf.freeze(), make_metadata()).unwrap();

        assert_eq!(row.len(), 2);
        assert_eq!(row.get(1).unwrap(), Some(&b"test"[..]));
        assert_eq!(row.get(2).unwrap(), None);
        assert_eq!(row.get_str(1).unwrap().as_deref(), Some("test"));
        assert_eq!(row.iter().filter(|v| v.is_none()).count(), 1);
    }

    #[test]
    fn test_get_by_name() {
        let row = Row::new(
            vec![Some(Bytes::from_static(b"x")), Some(Bytes::from_static(b"42"))],
            make_metadata(),
        );
        assert_eq!(row.get_by_name("value").unwrap(), Some(&b"42"[..]));
        assert_eq!(row.get_by_name("t.name").unwrap(), Some(&b"x"[..]));
        assert!(matches!(
            row.get_by_name("VALUE"),
            Err(Error::ColumnNotFound { .. })
        ));
        assert!(matches!(row.get(0), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_truncated_row() {
        let mut buf = WriteBuffer::new();
        buf.write_lenenc_str("only one");
        match Row::decode_text(buf.freeze(), make_metadata()) {
            Err(Error::ProtocolDecode { ordinal, .. }) => assert_eq!(ordinal, 2),
            other => panic!("Expected ProtocolDecode, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut buf = WriteBuffer::new();
        buf.write_lenenc_str("a");
        buf.write_lenenc_str("1");
        buf.write_lenenc_str("extra");
        match Row::decode_text(buf.freeze(), make_metadata()) {
            Err(Error::ProtocolDecode { ordinal, message }) => {
                assert_eq!(ordinal, 2);
                assert!(message.contains("trailing"));
            }
            other => panic!("Expected ProtocolDecode, got {:?}", other),
        }
    }
}
