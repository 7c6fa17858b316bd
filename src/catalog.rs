//! Catalog "list columns" report.
//!
//! Each catalog record is turned into the descriptor a live query over
//! that column would produce and resolved by the same code as live
//! result sets, so `DATA_TYPE` always agrees with the result-set metadata.

use crate::protocol::charset;
use crate::protocol::connect::MetadataOptions;
use crate::protocol::constants::{DEFAULT_CATALOG, MYSQL_TYPE_INVALID};
use crate::protocol::types::{
    ColumnDescriptor, ColumnFlags, Nullability, ResolvedColumn, StandardType, WireType,
};

/// One row of an information-schema style COLUMNS listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumn {
    pub table_catalog: String,
    pub table_schema: String,
    pub table_name: String,
    pub column_name: String,
    /// 1-based position within the table.
    pub ordinal_position: u32,
    /// Bare type name, e.g. `smallint`.
    pub data_type: String,
    /// Full declaration, e.g. `smallint(5) unsigned`.
    pub column_type: String,
    pub is_nullable: bool,
    pub character_maximum_length: Option<u64>,
    pub character_octet_length: Option<u64>,
    pub numeric_precision: Option<u64>,
    pub numeric_scale: Option<u64>,
    /// `None` for non-character columns.
    pub character_set_name: Option<String>,
    /// Extra attributes, e.g. `auto_increment`.
    pub extra: String,
}

impl CatalogColumn {
    /// Create a nullable column record with the given declaration.
    pub fn new(
        table_schema: impl Into<String>,
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        ordinal_position: u32,
        data_type: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            table_catalog: DEFAULT_CATALOG.to_string(),
            table_schema: table_schema.into(),
            table_name: table_name.into(),
            column_name: column_name.into(),
            ordinal_position,
            data_type: data_type.into(),
            column_type: column_type.into(),
            is_nullable: true,
            character_maximum_length: None,
            character_octet_length: None,
            numeric_precision: None,
            numeric_scale: None,
            character_set_name: None,
            extra: String::new(),
        }
    }

    /// The descriptor a live `SELECT` of this column would carry.
    pub fn to_descriptor(&self) -> ColumnDescriptor {
        let wire = WireType::from_catalog_name(&self.data_type)
            .unwrap_or(WireType::Unknown(MYSQL_TYPE_INVALID));
        let charset_id = charset::charset_id_for_name(self.character_set_name.as_deref());
        let column_type = self.column_type.to_ascii_lowercase();

        let mut flags = ColumnFlags::empty();
        flags.set(ColumnFlags::NOT_NULL, !self.is_nullable);
        flags.set(ColumnFlags::UNSIGNED, column_type.contains("unsigned"));
        flags.set(ColumnFlags::ZEROFILL, column_type.contains("zerofill"));
        flags.set(
            ColumnFlags::AUTO_INCREMENT,
            self.extra.to_ascii_lowercase().contains("auto_increment"),
        );
        flags.set(ColumnFlags::BLOB, wire.is_blob());
        flags.set(ColumnFlags::ENUM, wire == WireType::Enum);
        flags.set(ColumnFlags::SET, wire == WireType::Set);
        flags.set(ColumnFlags::BINARY, charset::is_binary(charset_id));

        let decimal_scale = self.numeric_scale.unwrap_or(0).min(u8::MAX as u64) as u8;
        ColumnDescriptor::new(self.column_name.clone(), wire)
            .with_origin(
                self.table_schema.clone(),
                self.table_name.clone(),
                self.table_name.clone(),
                self.column_name.clone(),
            )
            .with_length(self.declared_length(wire, charset_id, decimal_scale, flags), decimal_scale)
            .with_flags(flags)
            .with_charset(charset_id)
    }

    fn declared_length(
        &self,
        wire: WireType,
        charset_id: u16,
        decimal_scale: u8,
        flags: ColumnFlags,
    ) -> u32 {
        // The server sends character columns as characters times the widest
        // encoding of the charset, not as the stored octet length.
        let length = if let Some(chars) = self.character_maximum_length {
            chars.saturating_mul(u64::from(charset::max_bytes_per_char(charset_id)))
        } else if let Some(octets) = self.character_octet_length {
            octets
        } else if let Some(digits) = self.numeric_precision {
            if matches!(wire, WireType::Decimal | WireType::NewDecimal) {
                let sign = u64::from(!flags.contains(ColumnFlags::UNSIGNED));
                digits + sign + u64::from(decimal_scale > 0)
            } else {
                digits
            }
        } else {
            0
        };
        length.min(u32::MAX as u64) as u32
    }
}

/// One row of the "list columns" report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub table_cat: String,
    pub table_schem: String,
    pub table_name: String,
    pub column_name: String,
    /// SQL type code, identical to the live result-set metadata.
    pub data_type: i32,
    pub type_name: &'static str,
    pub column_size: u32,
    /// Scale for numeric types.
    pub decimal_digits: Option<u8>,
    pub nullable: Nullability,
    pub ordinal_position: u32,
    pub is_autoincrement: bool,
}

impl ColumnReport {
    /// Report a catalog record.
    pub fn from_catalog(column: &CatalogColumn) -> Self {
        let resolved =
            ResolvedColumn::resolve(1, column.to_descriptor(), &MetadataOptions::default());
        let decimal_digits = match resolved.standard_type {
            StandardType::Decimal | StandardType::Real | StandardType::Double => {
                Some(resolved.scale())
            }
            t if t.is_integer() => Some(0),
            _ => None,
        };
        Self {
            table_cat: column.table_catalog.clone(),
            table_schem: column.table_schema.clone(),
            table_name: column.table_name.clone(),
            column_name: column.column_name.clone(),
            data_type: resolved.sql_type_code(),
            type_name: resolved.type_name,
            column_size: resolved.precision(),
            decimal_digits,
            nullable: resolved.nullability(),
            ordinal_position: column.ordinal_position,
            is_autoincrement: resolved.is_auto_increment,
        }
    }
}

/// List columns matching SQL LIKE patterns, ordered by schema, table and
/// ordinal position. `None` matches everything.
pub fn list_columns(
    columns: &[CatalogColumn],
    table_pattern: Option<&str>,
    column_pattern: Option<&str>,
) -> Vec<ColumnReport> {
    let mut matched: Vec<&CatalogColumn> = columns
        .iter()
        .filter(|c| table_pattern.map_or(true, |p| like_match(p, &c.table_name)))
        .filter(|c| column_pattern.map_or(true, |p| like_match(p, &c.column_name)))
        .collect();
    matched.sort_by(|a, b| {
        (&a.table_schema, &a.table_name, a.ordinal_position).cmp(&(
            &b.table_schema,
            &b.table_name,
            b.ordinal_position,
        ))
    });
    matched.into_iter().map(ColumnReport::from_catalog).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LikeToken {
    Any,
    One,
    Char(char),
}

fn tokenize(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::Any,
            '_' => LikeToken::One,
            // Trailing backslash matches itself.
            '\\' => LikeToken::Char(chars.next().unwrap_or('\\')),
            c => LikeToken::Char(c),
        });
    }
    tokens
}

/// SQL LIKE match with `%`, `_` and `\` escapes. Case-sensitive.
pub fn like_match(pattern: &str, text: &str) -> bool {
    let tokens = tokenize(pattern);
    let text: Vec<char> = text.chars().collect();
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(LikeToken::Any) => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(LikeToken::One) => {
                p += 1;
                t += 1;
            }
            Some(LikeToken::Char(c)) if *c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((bp, bt)) => {
                    p = bp + 1;
                    t = bt + 1;
                    backtrack = Some((bp, bt + 1));
                }
                None => return false,
            },
        }
    }
    tokens[p..].iter().all(|t| *t == LikeToken::Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rsmd() -> Vec<CatalogColumn> {
        let mut id = CatalogColumn::new("testj", "test_rsmd", "id_col", 1, "int", "int(11)");
        id.is_nullable = false;
        id.numeric_precision = Some(10);
        id.numeric_scale = Some(0);
        id.extra = "auto_increment".to_string();

        let mut nullable = CatalogColumn::new(
            "testj",
            "test_rsmd",
            "nullable_col",
            2,
            "varchar",
            "varchar(20)",
        );
        nullable.character_maximum_length = Some(20);
        nullable.character_octet_length = Some(80);
        nullable.character_set_name = Some("utf8mb4".to_string());

        let mut us = CatalogColumn::new(
            "testj",
            "test_rsmd",
            "us",
            5,
            "smallint",
            "smallint(5) unsigned",
        );
        us.numeric_precision = Some(5);

        let mut chr = CatalogColumn::new("testj", "test_rsmd", "char_col", 4, "char", "char(10)");
        chr.character_maximum_length = Some(10);
        chr.character_set_name = Some("latin1".to_string());

        let other = CatalogColumn::new("testj", "testXrsmd", "x", 1, "int", "int(11)");
        vec![us, other, chr, nullable, id]
    }

    #[test]
    fn test_list_columns_order_and_types() {
        let report = list_columns(&test_rsmd(), Some("test\\_rsmd"), None);
        let names: Vec<_> = report.iter().map(|r| r.column_name.as_str()).collect();
        assert_eq!(names, vec!["id_col", "nullable_col", "char_col", "us"]);

        assert_eq!(report[0].data_type, StandardType::Integer.sql_type_code());
        assert!(report[0].is_autoincrement);
        assert_eq!(report[0].nullable, Nullability::NoNulls);
        assert_eq!(report[1].data_type, StandardType::Varchar.sql_type_code());
        assert_eq!(report[1].column_size, 20);
        assert_eq!(report[1].nullable, Nullability::Nullable);
        assert_eq!(report[2].data_type, StandardType::Char.sql_type_code());
        assert_eq!(report[3].data_type, StandardType::SmallInt.sql_type_code());
        assert_eq!(report[3].type_name, "SMALLINT UNSIGNED");
        assert_eq!(report[3].decimal_digits, Some(0));
    }

    #[test]
    fn test_unescaped_underscore_matches_any_char() {
        let report = list_columns(&test_rsmd(), Some("test_rsmd"), Some("x"));
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].table_name, "testXrsmd");
    }

    #[test]
    fn test_decimal_precision_round_trips() {
        let mut price = CatalogColumn::new("s", "t", "price", 1, "decimal", "decimal(10,2)");
        price.numeric_precision = Some(10);
        price.numeric_scale = Some(2);
        let report = ColumnReport::from_catalog(&price);
        assert_eq!(report.data_type, StandardType::Decimal.sql_type_code());
        assert_eq!(report.column_size, 10);
        assert_eq!(report.decimal_digits, Some(2));
    }

    #[test]
    fn test_unknown_catalog_type_is_other() {
        let col = CatalogColumn::new("s", "t", "addr", 1, "inet6", "inet6");
        let report = ColumnReport::from_catalog(&col);
        assert_eq!(report.data_type, StandardType::Other.sql_type_code());
        assert_eq!(report.decimal_digits, None);
    }

    #[test]
    fn test_binary_catalog_columns() {
        let mut col = CatalogColumn::new("s", "t", "b", 1, "varbinary", "varbinary(16)");
        col.character_maximum_length = Some(16);
        col.character_set_name = Some("binary".to_string());
        assert_eq!(
            ColumnReport::from_catalog(&col).data_type,
            StandardType::Varbinary.sql_type_code()
        );
    }

    #[test]
    fn test_like_match() {
        assert!(like_match("%", ""));
        assert!(like_match("%", "anything"));
        assert!(like_match("t%", "t1"));
        assert!(like_match("%_rsmd", "test_rsmd"));
        assert!(like_match("t_", "t1"));
        assert!(!like_match("t_", "t"));
        assert!(!like_match("t_", "t12"));
        assert!(like_match("a%b%c", "aXXbYYc"));
        assert!(!like_match("a%b%c", "aXXbYY"));
        assert!(like_match("100\\%", "100%"));
        assert!(!like_match("100\\%", "1000"));
        assert!(!like_match("T1", "t1"));
    }
}
