//! Integration tests for result-set metadata built from wire records.
//!
//! Each test encodes the column definitions a server sends for a query and
//! checks the resolved metadata.

use bytes::Bytes;
use colmeta::protocol::WriteBuffer;
use colmeta::{
    ColumnDescriptor, ColumnFlags, ConnectParams, Error, MetadataOptions, Nullability,
    ResultSet, ResultSetMetadata, StandardType, WireType,
};

const UTF8MB4: u16 = 45;
const LATIN1: u16 = 8;
const BINARY: u16 = 63;

/// `select id_col, nullable_col, unikey_col as something, char_col, us from test_rsmd`
fn test_rsmd_records() -> Vec<Bytes> {
    vec![
        ColumnDescriptor::new("id_col", WireType::Long)
            .with_origin("testj", "test_rsmd", "test_rsmd", "id_col")
            .with_length(11, 0)
            .with_charset(BINARY)
            .with_flags(
                ColumnFlags::NOT_NULL
                    | ColumnFlags::PRIMARY_KEY
                    | ColumnFlags::AUTO_INCREMENT
                    | ColumnFlags::BINARY,
            )
            .encode(),
        ColumnDescriptor::new("nullable_col", WireType::VarString)
            .with_origin("testj", "test_rsmd", "test_rsmd", "nullable_col")
            .with_length(80, 0)
            .with_charset(UTF8MB4)
            .encode(),
        ColumnDescriptor::new("something", WireType::Long)
            .with_origin("testj", "test_rsmd", "test_rsmd", "unikey_col")
            .with_length(11, 0)
            .with_charset(BINARY)
            .with_flags(ColumnFlags::UNIQUE_KEY | ColumnFlags::BINARY)
            .encode(),
        ColumnDescriptor::new("char_col", WireType::String)
            .with_origin("testj", "test_rsmd", "test_rsmd", "char_col")
            .with_length(10, 0)
            .with_charset(LATIN1)
            .encode(),
        ColumnDescriptor::new("us", WireType::Short)
            .with_origin("testj", "test_rsmd", "test_rsmd", "us")
            .with_length(5, 0)
            .with_charset(BINARY)
            .with_flags(ColumnFlags::UNSIGNED | ColumnFlags::BINARY)
            .encode(),
    ]
}

/// `select t1.*, t2.* from t1 join t2`
fn join_records() -> Vec<Bytes> {
    let mut records = Vec::new();
    for table in ["t1", "t2"] {
        records.push(
            ColumnDescriptor::new("id", WireType::Long)
                .with_origin("testj", table, table, "id")
                .with_length(11, 0)
                .encode(),
        );
        records.push(
            ColumnDescriptor::new("name", WireType::VarString)
                .with_origin("testj", table, table, "name")
                .with_length(80, 0)
                .with_charset(UTF8MB4)
                .encode(),
        );
    }
    records
}

/// `SELECT id AS id_alias FROM t3 AS t1_alias`
fn aliased_records() -> Vec<Bytes> {
    vec![ColumnDescriptor::new("id_alias", WireType::Long)
        .with_origin("testj", "t1_alias", "t3", "id")
        .with_length(11, 0)
        .encode()]
}

fn metadata(records: Vec<Bytes>, options: &MetadataOptions) -> ResultSetMetadata {
    ResultSetMetadata::from_column_definitions(records, options).unwrap()
}

#[test]
fn test_metadata_attributes() {
    let rsmd = metadata(test_rsmd_records(), &MetadataOptions::default());

    assert_eq!(rsmd.count(), 5);
    assert!(rsmd.is_auto_increment(1).unwrap());
    assert!(!rsmd.is_auto_increment(2).unwrap());
    assert_eq!(rsmd.is_nullable(1).unwrap(), Nullability::NoNulls);
    assert_eq!(rsmd.is_nullable(2).unwrap(), Nullability::Nullable);
    assert_eq!(rsmd.column_class_name(1).unwrap(), "Integer");
    assert_eq!(rsmd.column_class_name(2).unwrap(), "String");
    assert_eq!(rsmd.column_class_name(3).unwrap(), "Integer");
    assert_eq!(rsmd.column_label(1).unwrap(), "id_col");
    assert_eq!(rsmd.column_label(2).unwrap(), "nullable_col");
    assert_eq!(rsmd.column_label(3).unwrap(), "something");
    assert_eq!(rsmd.column_name(3).unwrap(), "unikey_col");
    assert!(rsmd.is_unique(3).unwrap());
    assert_eq!(rsmd.column_type(4).unwrap(), StandardType::Char.sql_type_code());
    assert_eq!(rsmd.precision(2).unwrap(), 20);
    assert_eq!(rsmd.display_size(4).unwrap(), 10);
}

#[test]
fn test_unsigned_smallint_is_smallint() {
    let rsmd = metadata(test_rsmd_records(), &MetadataOptions::default());

    assert_eq!(rsmd.column_type(5).unwrap(), 5);
    assert_ne!(rsmd.column_type(5).unwrap(), StandardType::Integer.sql_type_code());
    assert_ne!(rsmd.column_type(5).unwrap(), StandardType::BigInt.sql_type_code());
    assert_eq!(rsmd.column_type_name(5).unwrap(), "SMALLINT UNSIGNED");
    assert!(!rsmd.is_signed(5).unwrap());
    assert_eq!(
        rsmd.attributes_at(5).unwrap().integer_range(),
        Some((0, 65535))
    );
}

#[test]
fn test_auto_increment_not_null_consistency() {
    let rsmd = metadata(test_rsmd_records(), &MetadataOptions::default());
    for col in rsmd.columns() {
        let not_null = col.descriptor.flags.contains(ColumnFlags::NOT_NULL);
        assert_eq!(col.is_nullable, !not_null);
        if col.is_auto_increment {
            assert_eq!(col.nullability(), Nullability::NoNulls);
        }
    }
}

#[test]
fn test_label_vs_name_default_policy() {
    let rsmd = metadata(aliased_records(), &MetadataOptions::default());

    assert_eq!(rsmd.column_label(1).unwrap(), "id_alias");
    assert_eq!(rsmd.column_name(1).unwrap(), "id");
    assert_eq!(rsmd.table_name(1).unwrap(), "t3");
}

#[test]
fn test_label_vs_name_legacy_policy() {
    let params =
        ConnectParams::parse("mariadb://localhost:3306/testj?useOldAliasMetadataBehavior=true")
            .unwrap();
    let rsmd = metadata(aliased_records(), &params.metadata);

    assert_eq!(rsmd.column_label(1).unwrap(), "id_alias");
    assert_eq!(rsmd.column_name(1).unwrap(), "id_alias");
    assert_eq!(rsmd.table_name(1).unwrap(), "t1_alias");
}

#[test]
fn test_join_name_resolution() {
    let rs = ResultSet::from_column_definitions(
        join_records(),
        Vec::new(),
        &MetadataOptions::default(),
    )
    .unwrap();

    assert_eq!(rs.find_column("id").unwrap(), 1);
    assert_eq!(rs.find_column("name").unwrap(), 2);
    assert_eq!(rs.find_column("t1.id").unwrap(), 1);
    assert_eq!(rs.find_column("t1.name").unwrap(), 2);
    assert_eq!(rs.find_column("t2.id").unwrap(), 3);
    assert_eq!(rs.find_column("t2.name").unwrap(), 4);
    // Memoized lookups give the same answer.
    assert_eq!(rs.find_column("t2.name").unwrap(), 4);
    assert!(matches!(
        rs.find_column("t3.id"),
        Err(Error::ColumnNotFound { .. })
    ));
}

#[test]
fn test_join_rows_by_name() {
    let mut row = WriteBuffer::new();
    row.write_lenenc_str("1");
    row.write_lenenc_str("foo");
    row.write_lenenc_str("2");
    row.write_lenenc_str("bar");

    let rs = ResultSet::from_column_definitions(
        join_records(),
        vec![row.freeze()],
        &MetadataOptions::default(),
    )
    .unwrap();
    assert_eq!(rs.len(), 1);
    assert_eq!(rs.column_labels(), vec!["id", "name", "id", "name"]);

    let row = &rs.rows()[0];
    assert_eq!(row.get_by_name("name").unwrap(), Some(&b"foo"[..]));
    assert_eq!(row.get_by_name("t2.name").unwrap(), Some(&b"bar"[..]));
    assert_eq!(row.get_str(3).unwrap().as_deref(), Some("2"));
}

#[test]
fn test_computed_columns() {
    // select count(*), 1 from information_schema.tables
    let records = vec![
        ColumnDescriptor::new("count(*)", WireType::LongLong)
            .with_length(21, 0)
            .with_flags(ColumnFlags::NOT_NULL | ColumnFlags::BINARY)
            .encode(),
        ColumnDescriptor::new("1", WireType::LongLong)
            .with_length(1, 0)
            .with_flags(ColumnFlags::NOT_NULL | ColumnFlags::BINARY)
            .encode(),
    ];
    let rsmd = metadata(records, &MetadataOptions::default());

    assert_eq!(rsmd.column_name(1).unwrap(), "count(*)");
    assert_eq!(rsmd.column_name(2).unwrap(), "1");
    assert_eq!(rsmd.column_label(1).unwrap(), "count(*)");
    assert_eq!(rsmd.table_name(1).unwrap(), "");
    assert_eq!(rsmd.column_type(1).unwrap(), StandardType::BigInt.sql_type_code());
    assert!(rsmd.is_read_only(2).unwrap());
    assert_eq!(rsmd.find_ordinal("count(*)").unwrap(), 1);
    assert_eq!(rsmd.find_ordinal("1").unwrap(), 2);
}

#[test]
fn test_construction_is_idempotent() {
    for options in [
        MetadataOptions::default(),
        MetadataOptions {
            legacy_alias_metadata: true,
        },
    ] {
        let a = metadata(test_rsmd_records(), &options);
        let b = metadata(test_rsmd_records(), &options);
        assert_eq!(a.columns(), b.columns());
    }
}

#[test]
fn test_ordinal_stability() {
    let rsmd = metadata(join_records(), &MetadataOptions::default());
    let snapshot: Vec<_> = rsmd.columns().to_vec();
    let _ = rsmd.find_ordinal("t2.id").unwrap();
    for i in 1..=rsmd.count() {
        let col = rsmd.attributes_at(i).unwrap();
        assert_eq!(col.ordinal, i);
        assert_eq!(col, &snapshot[i - 1]);
    }
}

#[test]
fn test_out_of_range_access() {
    for records in [test_rsmd_records(), join_records(), aliased_records()] {
        let rsmd = metadata(records, &MetadataOptions::default());
        assert!(matches!(
            rsmd.attributes_at(0),
            Err(Error::IndexOutOfRange { index: 0, .. })
        ));
        let past = rsmd.count() + 1;
        match rsmd.attributes_at(past) {
            Err(Error::IndexOutOfRange { index, count }) => {
                assert_eq!(index, past);
                assert_eq!(count, rsmd.count());
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_malformed_record_aborts_construction() {
    let mut records = test_rsmd_records();
    let truncated = records[3].slice(..records[3].len() - 8);
    records[3] = truncated;

    match ResultSetMetadata::from_column_definitions(records, &MetadataOptions::default()) {
        Err(Error::ProtocolDecode { ordinal, .. }) => assert_eq!(ordinal, 4),
        other => panic!("Expected ProtocolDecode, got {:?}", other),
    }
}

#[test]
fn test_concurrent_readers() {
    let rsmd = metadata(join_records(), &MetadataOptions::default());
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(rsmd.find_ordinal("t2.id").unwrap(), 3);
                assert_eq!(rsmd.find_ordinal("id").unwrap(), 1);
                assert_eq!(rsmd.column_name(4).unwrap(), "name");
            });
        }
    });
}
