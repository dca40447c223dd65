//! Loading catalogs and serialized parse trees from disk or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pengim_core::catalog::CatalogError;
use pengim_core::tree::Sentence;
use pengim_core::TerminalCatalog;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid parse tree on line {line}: {msg}")]
    Tree { line: usize, msg: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read a catalog file, choosing the format by extension (`.json` or TOML).
/// Without a path, the bundled catalog is used.
pub fn load_catalog(path: Option<&str>) -> Result<TerminalCatalog, InputError> {
    let Some(path) = path else {
        return Ok(TerminalCatalog::bundled().clone());
    };
    let content = read_path(path)?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    Ok(if is_json {
        TerminalCatalog::from_json(&content)?
    } else {
        TerminalCatalog::from_toml(&content)?
    })
}

/// Read the input file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| InputError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
        Some(p) => read_path(p),
    }
}

/// Parse sentences: either one JSON document, or one sentence per line.
pub fn parse_sentences(text: &str) -> Result<Vec<Sentence>, InputError> {
    if let Ok(sentence) = serde_json::from_str::<Sentence>(text) {
        return Ok(vec![sentence]);
    }

    let mut sentences = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let sentence = serde_json::from_str(line).map_err(|e| InputError::Tree {
            line: i + 1,
            msg: e.to_string(),
        })?;
        sentences.push(sentence);
    }
    Ok(sentences)
}

fn read_path(path: &str) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_string(),
        source,
    })
}
