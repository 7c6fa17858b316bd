//! Name resolution index: column name to 1-based ordinal.
//!
//! Built on first lookup from an immutable column list and discarded with
//! it. Lookups are case-sensitive. For duplicate names the earliest
//! ordinal wins, so an unqualified `id` over `t1.*, t2.*` resolves to
//! `t1.id`.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::types::ResolvedColumn;

#[derive(Debug, Default)]
struct NameTable {
    by_name: HashMap<String, usize>,
    by_table: HashMap<String, HashMap<String, usize>>,
    by_label: HashMap<String, usize>,
}

impl NameTable {
    fn build(columns: &[ResolvedColumn]) -> Self {
        let mut table = NameTable::default();
        for col in columns {
            table
                .by_name
                .entry(col.effective_column_name.clone())
                .or_insert(col.ordinal);
            table
                .by_table
                .entry(col.effective_table_name.clone())
                .or_default()
                .entry(col.effective_column_name.clone())
                .or_insert(col.ordinal);
            table
                .by_label
                .entry(col.label().to_string())
                .or_insert(col.ordinal);
        }
        table
    }

    fn unqualified(&self, name: &str) -> Option<usize> {
        // Labels are the fallback for aliased columns whose effective
        // name is the stored one.
        self.by_name
            .get(name)
            .or_else(|| self.by_label.get(name))
            .copied()
    }

    fn lookup(&self, name: &str) -> Option<usize> {
        match name.rsplit_once('.') {
            Some((table, column)) => self
                .by_table
                .get(table)
                .and_then(|cols| cols.get(column))
                .copied()
                // Labels like `count(t.x)` contain dots of their own.
                .or_else(|| self.unqualified(name)),
            None => self.unqualified(name),
        }
    }
}

/// Lazily built lookup from optionally table-qualified names to ordinals.
///
/// Safe for concurrent readers: the table is built at most once, and the
/// memo only ever gains entries whose value is a pure function of the key.
///
/// Owned by exactly one [`ResultSetMetadata`](super::ResultSetMetadata),
/// which always passes its own column list.
#[derive(Debug, Default)]
pub(crate) struct NameResolutionIndex {
    table: OnceCell<NameTable>,
    memo: RwLock<HashMap<String, usize>>,
}

impl NameResolutionIndex {
    /// Create an empty, unbuilt index.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the index has been built.
    #[cfg(test)]
    fn is_built(&self) -> bool {
        self.table.get().is_some()
    }

    /// Find the 1-based ordinal for `name` among `columns`.
    ///
    /// `columns` must be the same list on every call.
    pub(crate) fn find_ordinal(&self, columns: &[ResolvedColumn], name: &str) -> Result<usize> {
        if let Some(&ordinal) = self.memo.read().get(name) {
            return Ok(ordinal);
        }

        let table = self.table.get_or_init(|| {
            debug!(columns = columns.len(), "building column name index");
            NameTable::build(columns)
        });
        let ordinal = table
            .lookup(name)
            .ok_or_else(|| Error::column_not_found(name))?;

        self.memo.write().insert(name.to_string(), ordinal);
        Ok(ordinal)
    }
}
