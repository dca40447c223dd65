//! Terminal catalog: spelling of each terminal in each catalog-driven scheme.
//!
//! The catalog is immutable once built. Renderers borrow it; nothing here
//! holds interior mutability, so one instance can be shared across threads.
//! The bundled table is embedded via `include_str!("default_terminals.toml")`
//! and checked by `build.rs`.

mod config;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_catalog_json, parse_catalog_toml, CatalogError, Spellings};

use crate::terminal::Terminal;

pub const DEFAULT_TERMINALS_TOML: &str = include_str!("default_terminals.toml");

/// Returns the embedded default catalog TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TERMINALS_TOML
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCatalog {
    entries: BTreeMap<Terminal, Spellings>,
}

impl TerminalCatalog {
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            entries: parse_catalog_toml(toml_str)?,
        })
    }

    pub fn from_json(json_str: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            entries: parse_catalog_json(json_str)?,
        })
    }

    /// The embedded catalog, parsed on first use.
    pub fn bundled() -> &'static TerminalCatalog {
        static INSTANCE: OnceLock<TerminalCatalog> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            TerminalCatalog::from_toml(DEFAULT_TERMINALS_TOML)
                .expect("bundled terminal catalog must be valid")
        })
    }

    /// Spelling of `terminal` under `scheme_key`, if the catalog has one.
    pub fn spelling(&self, terminal: impl Into<Terminal>, scheme_key: &str) -> Option<&str> {
        self.entries
            .get(&terminal.into())
            .and_then(|s| s.get(scheme_key))
            .map(String::as_str)
    }

    /// Scheme keys that define `terminal`.
    pub fn schemes_for(&self, terminal: impl Into<Terminal>) -> impl Iterator<Item = &str> {
        self.entries
            .get(&terminal.into())
            .into_iter()
            .flat_map(|s| s.keys().map(String::as_str))
    }

    /// Terminals with at least one catalog row, in category order.
    pub fn terminals(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.entries.keys().copied()
    }

    /// Every (terminal, spelling) pair the catalog defines for `scheme_key`.
    pub fn column<'a>(
        &'a self,
        scheme_key: &'a str,
    ) -> impl Iterator<Item = (Terminal, &'a str)> + 'a {
        self.entries
            .iter()
            .filter_map(move |(t, s)| s.get(scheme_key).map(|v| (*t, v.as_str())))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
