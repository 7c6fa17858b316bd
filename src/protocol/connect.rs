//! Connection parameters and the metadata options derived from them.

use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::constants::DEFAULT_PORT;

/// Options that shape how result-set metadata is resolved.
///
/// Read once when a result set is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataOptions {
    /// Return query aliases from the column name and table name accessors
    /// instead of the stored names (`useOldAliasMetadataBehavior`).
    pub legacy_alias_metadata: bool,
}

/// Connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectParams {
    /// Host address.
    pub host: String,
    /// Port number.
    pub port: u16,
    /// Default database, empty if none.
    pub database: String,
    /// Metadata resolution options.
    pub metadata: MetadataOptions,
}

impl ConnectParams {
    /// Create new connection parameters.
    pub fn new(host: impl Into<String>, port: u16, database: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            metadata: MetadataOptions::default(),
        }
    }

    /// Set legacy alias metadata behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use colmeta::ConnectParams;
    ///
    /// let params = ConnectParams::new("localhost", 3306, "test")
    ///     .with_legacy_alias_metadata(true);
    /// assert!(params.metadata.legacy_alias_metadata);
    /// ```
    pub fn with_legacy_alias_metadata(mut self, legacy: bool) -> Self {
        self.metadata.legacy_alias_metadata = legacy;
        self
    }

    /// Parse a connection URL like
    /// `mariadb://host:port/database?useOldAliasMetadataBehavior=true`.
    ///
    /// The `jdbc:mariadb://` and `mysql://` prefixes are accepted too.
    pub fn parse(url: &str) -> Result<Self> {
        let rest = ["jdbc:mariadb://", "jdbc:mysql://", "mariadb://", "mysql://"]
            .iter()
            .find_map(|prefix| url.strip_prefix(prefix))
            .ok_or_else(|| {
                Error::invalid_connect_string(
                    "Expected format: mariadb://host[:port]/database[?options]",
                )
            })?;

        let (location, query) = match rest.split_once('?') {
            Some((l, q)) => (l, Some(q)),
            None => (rest, None),
        };
        let (addr_part, database) = location.split_once('/').unwrap_or((location, ""));

        // Bracketed IPv6 literals contain colons of their own.
        let (host, port_part) = if let Some(bracketed) = addr_part.strip_prefix('[') {
            let (h, after) = bracketed.split_once(']').ok_or_else(|| {
                Error::invalid_connect_string(format!("Unclosed IPv6 host: {}", addr_part))
            })?;
            let port_part = match after {
                "" => None,
                _ => Some(after.strip_prefix(':').ok_or_else(|| {
                    Error::invalid_connect_string(format!("Invalid host: {}", addr_part))
                })?),
            };
            (h, port_part)
        } else {
            match addr_part.rsplit_once(':') {
                Some((h, p)) => (h, Some(p)),
                None => (addr_part, None),
            }
        };
        let port = match port_part {
            Some(p) => p
                .parse::<u16>()
                .map_err(|_| Error::invalid_connect_string(format!("Invalid port: {}", p)))?,
            None => DEFAULT_PORT,
        };
        let host = host.to_string();
        if host.is_empty() {
            return Err(Error::invalid_connect_string("Missing host"));
        }

        let mut params = Self::new(host, port, database);
        if let Some(query) = query {
            for pair in query.split('&').filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').unwrap_or((pair, "true"));
                params.apply_option(key, value)?;
            }
        }
        Ok(params)
    }

    fn apply_option(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "useOldAliasMetadataBehavior" => {
                self.metadata.legacy_alias_metadata = parse_bool(key, value)?;
            }
            _ => {
                debug!(option = key, "ignoring unknown connection option");
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::invalid_connect_string(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}
