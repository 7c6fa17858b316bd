//! Server collation ids and their character widths.
//!
//! Column lengths on the wire are in bytes; character-based accessors
//! divide by the maximum bytes per character of the column's charset.

use crate::protocol::constants::BINARY_CHARSET_ID;

/// Maximum bytes per character for a collation id.
///
/// Unknown ids are treated as single-byte charsets.
pub fn max_bytes_per_char(charset_id: u16) -> u32 {
    match charset_id {
        // utf8mb3
        33 | 83 | 192..=215 | 223 => 3,
        // utf8mb4
        45 | 46 | 224..=247 | 255 | 2304..=2383 => 4,
        // ucs2
        35 | 90 | 128..=151 | 159 => 2,
        // utf16, utf16le, utf32
        54 | 55 | 56 | 60 | 61 | 62 | 101..=124 | 160..=183 => 4,
        // big5, euckr, gb2312, gbk, sjis, cp932
        1 | 84 | 19 | 85 | 24 | 86 | 28 | 87 | 13 | 88 | 95 | 96 => 2,
        // ujis, eucjpms
        12 | 91 | 97 | 98 => 3,
        // gb18030
        248..=250 => 4,
        _ => 1,
    }
}

/// Whether the collation id is the binary pseudo-charset.
pub fn is_binary(charset_id: u16) -> bool {
    charset_id == BINARY_CHARSET_ID
}

/// Collation id for a character set name as reported by the catalog.
///
/// Returns the binary id for `None`/`"binary"` and the utf8mb4 default
/// collation for names this table does not know.
pub fn charset_id_for_name(name: Option<&str>) -> u16 {
    let Some(name) = name else {
        return BINARY_CHARSET_ID;
    };
    match name.to_ascii_lowercase().as_str() {
        "binary" => BINARY_CHARSET_ID,
        "latin1" => 8,
        "ascii" => 11,
        "utf8" | "utf8mb3" => 33,
        "ucs2" => 35,
        "utf8mb4" => 45,
        "utf16" => 54,
        "utf32" => 60,
        "big5" => 1,
        "gbk" => 28,
        "sjis" => 13,
        _ => 45,
    }
}
