//! Column definition (protocol 4.1) decoding.
//!
//! Wire format:
//! ```text
//! catalog        lenenc str
//! schema         lenenc str
//! table          lenenc str   (alias)
//! org_table      lenenc str
//! name           lenenc str   (alias)
//! org_name       lenenc str
//! fixed length   lenenc int   (always 0x0c)
//! charset        u16
//! column length  u32
//! type           u8
//! flags          u16
//! decimals       u8
//! filler         2 bytes
//! ```

use bytes::Bytes;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::COLUMN_DEFINITION_FIXED_LENGTH;
use crate::protocol::types::{ColumnDescriptor, ColumnFlags};

/// Decode one column definition record at `ordinal` (1-based).
pub fn decode_column_definition(ordinal: usize, record: Bytes) -> Result<ColumnDescriptor> {
    let mut buf = ReadBuffer::new(record);
    read_descriptor(&mut buf).map_err(|e| with_ordinal(e, ordinal))
}

/// Decode all column definition records of a result set, in order.
///
/// Fails on the first malformed record; no partial result is returned.
pub fn decode_column_definitions<I>(records: I) -> Result<Vec<ColumnDescriptor>>
where
    I: IntoIterator<Item = Bytes>,
{
    let records = records.into_iter();
    let mut columns = Vec::with_capacity(records.size_hint().0);
    for (i, record) in records.enumerate() {
        let desc = decode_column_definition(i + 1, record)?;
        trace!(
            ordinal = i + 1,
            label = %desc.column_label,
            wire_type = desc.wire_type_code,
            "decoded column definition"
        );
        columns.push(desc);
    }
    debug!(columns = columns.len(), "decoded result set header");
    Ok(columns)
}

fn read_descriptor(buf: &mut ReadBuffer) -> Result<ColumnDescriptor> {
    let catalog_name = buf.read_lenenc_str()?;
    let schema_name = buf.read_lenenc_str()?;
    let table_name = buf.read_lenenc_str()?;
    let origin_table_name = buf.read_lenenc_str()?;
    let column_label = buf.read_lenenc_str()?;
    let origin_column_name = buf.read_lenenc_str()?;

    let fixed_length = buf
        .read_lenenc_int()?
        .ok_or_else(|| Error::protocol(0, "NULL fixed-field length"))?;
    if fixed_length != COLUMN_DEFINITION_FIXED_LENGTH {
        return Err(Error::protocol(
            0,
            format!("Invalid fixed-field length: {:#x}", fixed_length),
        ));
    }

    let charset_id = buf.read_u16_le()?;
    let declared_length = buf.read_u32_le()?;
    let wire_type_code = buf.read_u8()?;
    let flags = ColumnFlags::from_bits_retain(buf.read_u16_le()?);
    let decimal_scale = buf.read_u8()?;
    // Filler; some proxies omit it.
    if buf.has_remaining(2) {
        buf.skip(2)?;
    }

    Ok(ColumnDescriptor {
        wire_type_code,
        declared_length,
        decimal_scale,
        flags,
        catalog_name,
        schema_name,
        table_name,
        origin_table_name,
        column_label,
        origin_column_name,
        charset_id,
    })
}

fn with_ordinal(err: Error, ordinal: usize) -> Error {
    match err {
        Error::ProtocolDecode { message, .. } => Error::ProtocolDecode { ordinal, message },
        other => Error::ProtocolDecode {
            ordinal,
            message: other.to_string(),
        },
    }
}
