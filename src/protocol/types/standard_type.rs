//! Client-facing SQL type taxonomy.
//!
//! Codes match `java.sql.Types`, which is what generic database tooling
//! expects from a `DATA_TYPE` column.

/// Abstract SQL type attached to every column.
///
/// Signedness is not part of the type: an unsigned SMALLINT is still
/// `SmallInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardType {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Decimal,
    Char,
    Varchar,
    /// TEXT family.
    LongVarchar,
    Binary,
    Varbinary,
    /// BLOB family.
    LongVarbinary,
    Date,
    Time,
    Timestamp,
    Null,
    Other,
}

impl StandardType {
    /// SQL type code.
    pub fn sql_type_code(&self) -> i32 {
        match self {
            StandardType::Bit => -7,
            StandardType::TinyInt => -6,
            StandardType::SmallInt => 5,
            StandardType::Integer => 4,
            StandardType::BigInt => -5,
            StandardType::Real => 7,
            StandardType::Double => 8,
            StandardType::Decimal => 3,
            StandardType::Char => 1,
            StandardType::Varchar => 12,
            StandardType::LongVarchar => -1,
            StandardType::Binary => -2,
            StandardType::Varbinary => -3,
            StandardType::LongVarbinary => -4,
            StandardType::Date => 91,
            StandardType::Time => 92,
            StandardType::Timestamp => 93,
            StandardType::Null => 0,
            StandardType::Other => 1111,
        }
    }

    /// Integer families.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            StandardType::TinyInt
                | StandardType::SmallInt
                | StandardType::Integer
                | StandardType::BigInt
        )
    }

    /// Numeric types that carry a sign.
    pub fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                StandardType::Real | StandardType::Double | StandardType::Decimal
            )
    }

    /// Character types.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            StandardType::Char | StandardType::Varchar | StandardType::LongVarchar
        )
    }

    /// Binary string types.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            StandardType::Binary | StandardType::Varbinary | StandardType::LongVarbinary
        )
    }
}

impl std::fmt::Display for StandardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StandardType::Bit => "BIT",
            StandardType::TinyInt => "TINYINT",
            StandardType::SmallInt => "SMALLINT",
            StandardType::Integer => "INTEGER",
            StandardType::BigInt => "BIGINT",
            StandardType::Real => "REAL",
            StandardType::Double => "DOUBLE",
            StandardType::Decimal => "DECIMAL",
            StandardType::Char => "CHAR",
            StandardType::Varchar => "VARCHAR",
            StandardType::LongVarchar => "LONGVARCHAR",
            StandardType::Binary => "BINARY",
            StandardType::Varbinary => "VARBINARY",
            StandardType::LongVarbinary => "LONGVARBINARY",
            StandardType::Date => "DATE",
            StandardType::Time => "TIME",
            StandardType::Timestamp => "TIMESTAMP",
            StandardType::Null => "NULL",
            StandardType::Other => "OTHER",
        };
        f.write_str(name)
    }
}
