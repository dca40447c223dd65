//! Teochew romanization engine.
//!
//! Renders a parsed syllable tree into Gengdang Pêng'im, Gaginang Peng'im,
//! Tie-lo, Duffus, Sinwenz, Tai-lo, or the fifteen-initial rime-table
//! notation. Parsing raw text is left to the caller.

pub mod catalog;
pub mod error;
pub mod render;
pub mod scheme;
pub mod terminal;
pub mod transliterate;
pub mod tree;

pub use catalog::TerminalCatalog;
pub use error::{RenderError, TransliterateError};
pub use render::Renderer;
pub use scheme::{Scheme, UnknownScheme};
pub use transliterate::{transliterate, transliterate_all};
