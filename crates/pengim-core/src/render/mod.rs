//! Parse-tree renderers, one per output scheme.
//!
//! A single [`Renderer`] walks sentence → word → syllable → terminal and
//! dispatches on its [`Scheme`] at each level. Catalog-driven schemes read
//! spellings from the injected [`TerminalCatalog`]; Duffus and Sinwenz carry
//! their own inventories, and the rime-table notation maps initials and
//! whole finals to characters.

mod diacritic;
mod duffus;
mod reconcile;
mod rime_table;
mod sinwenz;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::catalog::TerminalCatalog;
use crate::error::RenderError;
use crate::scheme::{Family, Scheme};
use crate::terminal::{CodaNasal, CodaStop, Initial, Medial, Terminal};
use crate::tree::{Coda, Final, Sentence, SentenceItem, Syllable, Tone, Word, WordItem};

pub use diacritic::{place_tone_mark, tone_mark};
pub use reconcile::reconcile;
pub use rime_table::{initial_character, rime_character, tone_label, RECOGNIZED_INITIALS};

/// Separator every hyphen-joining scheme normalizes to.
const HYPHEN: &str = "-";

#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    scheme: Scheme,
    catalog: &'c TerminalCatalog,
}

impl<'c> Renderer<'c> {
    pub fn new(scheme: Scheme, catalog: &'c TerminalCatalog) -> Self {
        Self { scheme, catalog }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Render a whole sentence. Any unmapped terminal fails the call; no
    /// partial output is returned.
    pub fn render(&self, sentence: &Sentence) -> Result<String, RenderError> {
        let _span = debug_span!("render", scheme = self.scheme.id(), items = sentence.items.len())
            .entered();

        let mut out = String::new();
        for item in &sentence.items {
            match item {
                SentenceItem::Word(word) => out.push_str(&self.render_word(word)?),
                SentenceItem::Literal(text) => out.push_str(text),
            }
        }
        Ok(out)
    }

    pub fn render_word(&self, word: &Word) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(word.items.len());
        for item in &word.items {
            parts.push(match item {
                WordItem::Syllable(syllable) => self.render_syllable(syllable)?,
                WordItem::Separator(sep) => self.render_separator(sep).to_string(),
            });
        }

        Ok(match self.scheme.family() {
            Family::PlainDigits | Family::RimeTable => parts.concat(),
            // Explicit separators are already hyphens; drop them and
            // hyphen-join so implicit boundaries get one too.
            Family::Diacritic | Family::Sinwenz => parts
                .into_iter()
                .filter(|p| p != HYPHEN)
                .collect::<Vec<_>>()
                .join(HYPHEN),
        })
    }

    pub fn render_separator<'s>(&self, sep: &'s str) -> &'s str {
        match self.scheme.family() {
            Family::PlainDigits => sep,
            Family::Diacritic | Family::Sinwenz => HYPHEN,
            Family::RimeTable => "",
        }
    }

    pub fn render_syllable(&self, syllable: &Syllable) -> Result<String, RenderError> {
        let initial = match syllable.initial {
            Some(i) => self.render_initial(i)?,
            None => "",
        };
        let fin = self.render_final(&syllable.fin)?;
        let tone = self.render_tone(syllable.tone.as_ref());

        match self.scheme.family() {
            Family::PlainDigits => Ok(format!("{initial}{fin}{tone}")),
            Family::Diacritic => {
                let body = format!("{initial}{fin}");
                if syllable.tone.is_none() {
                    return Ok(body);
                }
                place_tone_mark(&body, &tone)
            }
            Family::Sinwenz => sinwenz::apply_glide(format!("{initial}{fin}{tone}")),
            Family::RimeTable => Ok(rime_table::bracket(&format!("{initial}{fin}{tone}"))),
        }
    }

    pub fn render_initial(&self, initial: Initial) -> Result<&'c str, RenderError> {
        self.spell(initial.into())
    }

    pub fn render_medial(&self, medial: Medial) -> Result<&'c str, RenderError> {
        self.spell(medial.into())
    }

    pub fn render_coda(&self, coda: Coda) -> Result<&'c str, RenderError> {
        match coda {
            Coda::Stop(c) => self.spell(c.into()),
            Coda::Nasal(c) => self.spell(c.into()),
        }
    }

    /// Nasalization marker, placed after the medial and before any coda.
    pub fn render_nasal(&self) -> &'static str {
        match self.scheme {
            Scheme::Gdpi | Scheme::Zapngou => "n",
            Scheme::Ggnn => "ñ",
            Scheme::Tlo | Scheme::Tailo => "nn",
            Scheme::Duffus => "\u{207f}",
            Scheme::Sinwz => sinwenz::NASAL_TILDE,
        }
    }

    /// Medial + nasal + coda. The rime-table notation replaces the spelled
    /// final with its rime character, echoing the spelling when the table
    /// has no entry.
    pub fn render_final(&self, fin: &Final) -> Result<String, RenderError> {
        let mut spelled = self.render_medial(fin.medial)?.to_string();
        if fin.nasalized {
            spelled.push_str(self.render_nasal());
        }
        if let Some(coda) = fin.coda {
            spelled.push_str(self.render_coda(coda)?);
        }

        if self.scheme != Scheme::Zapngou {
            return Ok(spelled);
        }
        match rime_character(&spelled) {
            Some(c) => Ok(c.to_string()),
            None => {
                debug!(fin = %spelled, "final not in rime table, echoing");
                Ok(spelled)
            }
        }
    }

    /// Tone as the scheme writes it: digits, a combining mark, or a
    /// rime-table category label. Empty when the syllable is toneless.
    pub fn render_tone(&self, tone: Option<&Tone>) -> String {
        let Some(tone) = tone else {
            return String::new();
        };
        match self.scheme.family() {
            Family::PlainDigits => match tone.sandhi() {
                Some(sandhi) => format!("{}({})", tone.citation(), sandhi),
                None => tone.citation().to_string(),
            },
            Family::Diacritic => tone_mark(self.scheme, tone.citation()).to_string(),
            Family::Sinwenz => tone.citation().to_string(),
            Family::RimeTable => tone_label(tone.citation()).to_string(),
        }
    }

    /// Spelling of a single terminal, or `UnmappedTerminal`.
    pub fn spell(&self, terminal: Terminal) -> Result<&'c str, RenderError> {
        let spelled: Option<&'c str> = match (self.scheme, terminal) {
            (Scheme::Duffus, t) => duffus::spelling(t),
            (Scheme::Sinwz, t) => sinwenz::spelling(t),
            (Scheme::Zapngou, Terminal::Initial(i)) => Some(initial_character(i)),
            (scheme, t) => match merged_spelling(scheme, t) {
                Some(merged) => Some(merged),
                None => scheme
                    .catalog_key()
                    .and_then(|key| self.catalog.spelling(t, key)),
            },
        };
        spelled.ok_or(RenderError::UnmappedTerminal {
            terminal,
            scheme: self.scheme,
        })
    }
}

/// Codas a scheme merges into another coda regardless of the catalog.
fn merged_spelling(scheme: Scheme, terminal: Terminal) -> Option<&'static str> {
    match (scheme, terminal) {
        // Gengdang has neither -t nor -n.
        (Scheme::Gdpi, Terminal::CodaStop(CodaStop::T)) => Some("g"),
        (Scheme::Gdpi, Terminal::CodaNasal(CodaNasal::N)) => Some("ng"),
        // Dieghv finals in the rime table only know -k and -ng.
        (Scheme::Zapngou, Terminal::CodaStop(CodaStop::T)) => Some("k"),
        (Scheme::Zapngou, Terminal::CodaNasal(CodaNasal::N)) => Some("ng"),
        _ => None,
    }
}
