//! Alias policy: which names the name and table-name accessors return.
//!
//! The label accessor always reports the query-requested label and is
//! not affected by the policy.

use crate::protocol::types::ColumnDescriptor;

/// Effective table and column names for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNames {
    pub table_name: String,
    pub column_name: String,
}

/// Resolve the effective table and column names of a column.
///
/// With `legacy_alias_metadata` the query aliases are returned. Otherwise
/// the stored names are returned, falling back to the label (column) and
/// the empty string (table) for computed columns.
pub fn resolve_names(desc: &ColumnDescriptor, legacy_alias_metadata: bool) -> ResolvedNames {
    if legacy_alias_metadata {
        return ResolvedNames {
            table_name: desc.table_name.clone(),
            column_name: desc.column_label.clone(),
        };
    }

    let column_name = if desc.origin_column_name.is_empty() {
        desc.column_label.clone()
    } else {
        desc.origin_column_name.clone()
    };
    ResolvedNames {
        table_name: desc.origin_table_name.clone(),
        column_name,
    }
}
