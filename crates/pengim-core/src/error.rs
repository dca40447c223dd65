use crate::scheme::{Scheme, UnknownScheme};
use crate::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{terminal} has no {scheme} spelling")]
    UnmappedTerminal { terminal: Terminal, scheme: Scheme },
    #[error("malformed syllable: {reason}")]
    MalformedSyllable { reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    #[error(transparent)]
    UnknownScheme(#[from] UnknownScheme),
    #[error(transparent)]
    Render(#[from] RenderError),
}
