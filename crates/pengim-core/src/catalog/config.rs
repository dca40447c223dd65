use std::collections::BTreeMap;

use serde::Deserialize;

use crate::terminal::{Category, Terminal, TerminalParseError};

/// scheme key → spelling
pub type Spellings = BTreeMap<String, String>;

/// On-disk layout shared by the TOML and JSON catalog formats.
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    initials: BTreeMap<String, Spellings>,
    #[serde(default)]
    medials: BTreeMap<String, Spellings>,
    #[serde(default)]
    codastops: BTreeMap<String, Spellings>,
    #[serde(default)]
    codanasals: BTreeMap<String, Spellings>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Toml(String),
    #[error("JSON parse error: {0}")]
    Json(String),
    #[error("catalog defines no terminals")]
    Empty,
    #[error(transparent)]
    UnknownTerminal(#[from] TerminalParseError),
    #[error("empty {scheme} spelling for {terminal}")]
    EmptySpelling { terminal: Terminal, scheme: String },
}

/// Parse TOML text into a terminal → spellings map.
pub fn parse_catalog_toml(toml_str: &str) -> Result<BTreeMap<Terminal, Spellings>, CatalogError> {
    let raw: RawCatalog = toml::from_str(toml_str).map_err(|e| CatalogError::Toml(e.to_string()))?;
    validate(raw)
}

/// Parse the JSON layout (`{"initials": {"INIT_BH": {"gdpi": "bh"}}}`).
pub fn parse_catalog_json(json_str: &str) -> Result<BTreeMap<Terminal, Spellings>, CatalogError> {
    let raw: RawCatalog =
        serde_json::from_str(json_str).map_err(|e| CatalogError::Json(e.to_string()))?;
    validate(raw)
}

fn validate(raw: RawCatalog) -> Result<BTreeMap<Terminal, Spellings>, CatalogError> {
    let sections = [
        (Category::Initial, raw.initials),
        (Category::Medial, raw.medials),
        (Category::CodaStop, raw.codastops),
        (Category::CodaNasal, raw.codanasals),
    ];

    let mut map = BTreeMap::new();
    for (category, entries) in sections {
        for (symbol, spellings) in entries {
            let terminal = Terminal::parse_in(category, &symbol)?;
            if let Some((scheme, _)) = spellings.iter().find(|(_, v)| v.is_empty()) {
                return Err(CatalogError::EmptySpelling {
                    terminal,
                    scheme: scheme.clone(),
                });
            }
            map.insert(terminal, spellings);
        }
    }

    if map.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{CodaStop, Initial, Medial};

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[initials.INIT_BH]
gdpi = "bh"
tlo = "b"

[codastops.COD_K]
gdpi = "g"
"#;
        let map = parse_catalog_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Terminal::Initial(Initial::Bh)]["tlo"], "b");
        assert_eq!(map[&Terminal::CodaStop(CodaStop::K)]["gdpi"], "g");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_catalog_toml(super::super::DEFAULT_TERMINALS_TOML).unwrap();
        assert_eq!(map.len(), 47);
    }

    #[test]
    fn parse_valid_json() {
        let json = r#"{"medials": {"MED_UAI": {"gdpi": "uai", "ggnn": "uai"}}}"#;
        let map = parse_catalog_json(json).unwrap();
        assert_eq!(map[&Terminal::Medial(Medial::Uai)]["ggnn"], "uai");
    }

    #[test]
    fn error_empty_catalog() {
        let err = parse_catalog_toml("").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn error_unknown_terminal() {
        let toml = r#"
[initials.INIT_X]
gdpi = "x"
"#;
        let err = parse_catalog_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTerminal(_)));
    }

    #[test]
    fn error_terminal_in_wrong_section() {
        let toml = r#"
[medials.COD_K]
gdpi = "g"
"#;
        let err = parse_catalog_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTerminal(_)));
    }

    #[test]
    fn error_empty_spelling() {
        let toml = r#"
[codanasals.COD_M]
gdpi = ""
"#;
        let err = parse_catalog_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySpelling { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_catalog_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }

    #[test]
    fn error_invalid_json() {
        let err = parse_catalog_json("{\"initials\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
