//! Column definition flag bits.

bitflags::bitflags! {
    /// Flags carried by a column definition.
    ///
    /// Bits the server sends that are not named here are retained.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColumnFlags: u16 {
        /// Column cannot hold NULL.
        const NOT_NULL = 0x0001;
        /// Part of the primary key.
        const PRIMARY_KEY = 0x0002;
        /// Part of a unique key.
        const UNIQUE_KEY = 0x0004;
        /// Part of a non-unique key.
        const MULTIPLE_KEY = 0x0008;
        /// BLOB or TEXT column.
        const BLOB = 0x0010;
        /// Unsigned numeric column.
        const UNSIGNED = 0x0020;
        /// Zero-filled numeric column.
        const ZEROFILL = 0x0040;
        /// Binary collation.
        const BINARY = 0x0080;
        /// ENUM column.
        const ENUM = 0x0100;
        /// AUTO_INCREMENT column.
        const AUTO_INCREMENT = 0x0200;
        /// TIMESTAMP column.
        const TIMESTAMP = 0x0400;
        /// SET column.
        const SET = 0x0800;

        const _ = !0;
    }
}
