//! Syllable parse tree handed over by the parser.
//!
//! The tree is built once per input sentence, rendered once, and dropped.
//! Structural invariants (mandatory medial, at most one coda) are carried by
//! the types; tone digits are range-checked at construction.

use serde::{Deserialize, Serialize};

use crate::terminal::{CodaNasal, CodaStop, Initial, Medial};

/// Highest tone digit in the eight-tone system. 0 is the neutral tone.
pub const MAX_TONE: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToneError {
    #[error("tone digit out of range 0..=8: {0}")]
    OutOfRange(u8),
}

#[derive(Deserialize)]
struct RawTone {
    citation: u8,
    #[serde(default)]
    sandhi: Option<u8>,
}

/// Citation tone, optionally followed by the sandhi tone for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTone")]
pub struct Tone {
    citation: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    sandhi: Option<u8>,
}

impl Tone {
    pub fn new(citation: u8) -> Result<Self, ToneError> {
        check_digit(citation)?;
        Ok(Self {
            citation,
            sandhi: None,
        })
    }

    pub fn with_sandhi(citation: u8, sandhi: u8) -> Result<Self, ToneError> {
        check_digit(citation)?;
        check_digit(sandhi)?;
        Ok(Self {
            citation,
            sandhi: Some(sandhi),
        })
    }

    pub fn citation(&self) -> u8 {
        self.citation
    }

    pub fn sandhi(&self) -> Option<u8> {
        self.sandhi
    }
}

impl TryFrom<RawTone> for Tone {
    type Error = ToneError;

    fn try_from(raw: RawTone) -> Result<Self, Self::Error> {
        match raw.sandhi {
            Some(s) => Tone::with_sandhi(raw.citation, s),
            None => Tone::new(raw.citation),
        }
    }
}

fn check_digit(d: u8) -> Result<(), ToneError> {
    if d > MAX_TONE {
        return Err(ToneError::OutOfRange(d));
    }
    Ok(())
}

/// Syllable-final consonant: a stop or a nasal, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coda {
    Stop(CodaStop),
    Nasal(CodaNasal),
}

impl From<CodaStop> for Coda {
    fn from(c: CodaStop) -> Self {
        Coda::Stop(c)
    }
}

impl From<CodaNasal> for Coda {
    fn from(c: CodaNasal) -> Self {
        Coda::Nasal(c)
    }
}

/// Medial + optional nasalization + optional coda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Final {
    pub medial: Medial,
    #[serde(default)]
    pub nasalized: bool,
    #[serde(default)]
    pub coda: Option<Coda>,
}

impl Final {
    pub fn new(medial: Medial) -> Self {
        Self {
            medial,
            nasalized: false,
            coda: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    #[serde(default)]
    pub initial: Option<Initial>,
    #[serde(rename = "final")]
    pub fin: Final,
    /// `None` for the toneless variant.
    #[serde(default)]
    pub tone: Option<Tone>,
}

impl Syllable {
    /// Null-initial, toneless syllable on `medial`.
    pub fn new(medial: Medial) -> Self {
        Self {
            initial: None,
            fin: Final::new(medial),
            tone: None,
        }
    }

    pub fn with_initial(mut self, initial: Initial) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_coda(mut self, coda: impl Into<Coda>) -> Self {
        self.fin.coda = Some(coda.into());
        self
    }

    pub fn nasalized(mut self) -> Self {
        self.fin.nasalized = true;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn is_null_initial(&self) -> bool {
        self.initial.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordItem {
    Syllable(Syllable),
    /// Explicit syllable-boundary mark as typed.
    Separator(String),
}

/// Syllables of one word, with any explicit separators between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub items: Vec<WordItem>,
}

impl Word {
    /// Word whose syllables are adjacent with no separator terminal.
    pub fn from_syllables(syllables: impl IntoIterator<Item = Syllable>) -> Self {
        Self {
            items: syllables.into_iter().map(WordItem::Syllable).collect(),
        }
    }

    pub fn push_syllable(&mut self, syllable: Syllable) -> &mut Self {
        self.items.push(WordItem::Syllable(syllable));
        self
    }

    pub fn push_separator(&mut self, sep: impl Into<String>) -> &mut Self {
        self.items.push(WordItem::Separator(sep.into()));
        self
    }

    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> {
        self.items.iter().filter_map(|item| match item {
            WordItem::Syllable(s) => Some(s),
            WordItem::Separator(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceItem {
    Word(Word),
    /// Whitespace or punctuation between words, echoed as-is.
    Literal(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub items: Vec<SentenceItem>,
}

impl Sentence {
    /// Words separated by single spaces.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut items = Vec::new();
        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                items.push(SentenceItem::Literal(" ".to_string()));
            }
            items.push(SentenceItem::Word(word));
        }
        Self { items }
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.items.iter().filter_map(|item| match item {
            SentenceItem::Word(w) => Some(w),
            SentenceItem::Literal(_) => None,
        })
    }
}

impl From<Word> for Sentence {
    fn from(word: Word) -> Self {
        Self {
            items: vec![SentenceItem::Word(word)],
        }
    }
}

impl From<Syllable> for Sentence {
    fn from(syllable: Syllable) -> Self {
        Word::from_syllables([syllable]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_range_is_checked() {
        assert!(Tone::new(0).is_ok());
        assert!(Tone::new(8).is_ok());
        assert_eq!(Tone::new(9), Err(ToneError::OutOfRange(9)));
        assert_eq!(Tone::with_sandhi(2, 12), Err(ToneError::OutOfRange(12)));
    }

    #[test]
    fn from_words_inserts_spaces() {
        let w = Word::from_syllables([Syllable::new(Medial::A)]);
        let s = Sentence::from_words([w.clone(), w]);
        assert_eq!(s.items.len(), 3);
        assert_eq!(s.items[1], SentenceItem::Literal(" ".into()));
        assert_eq!(s.words().count(), 2);
    }

    #[test]
    fn syllables_skip_separators() {
        let mut w = Word::default();
        w.push_syllable(Syllable::new(Medial::A))
            .push_separator("-")
            .push_syllable(Syllable::new(Medial::I));
        let medials: Vec<Medial> = w.syllables().map(|s| s.fin.medial).collect();
        assert_eq!(medials, vec![Medial::A, Medial::I]);
    }

    #[test]
    fn json_shape() {
        let syl = Syllable::new(Medial::A)
            .with_initial(Initial::G)
            .with_coda(CodaStop::K)
            .with_tone(Tone::with_sandhi(8, 4).unwrap());
        let json = serde_json::to_value(syl).unwrap();
        assert_eq!(json["initial"], "INIT_G");
        assert_eq!(json["final"]["medial"], "MED_A");
        assert_eq!(json["final"]["coda"]["stop"], "COD_K");
        assert_eq!(json["tone"]["citation"], 8);
        assert_eq!(json["tone"]["sandhi"], 4);

        let back: Syllable = serde_json::from_value(json).unwrap();
        assert_eq!(back, syl);
    }

    #[test]
    fn json_defaults_for_optional_parts() {
        let syl: Syllable = serde_json::from_str(r#"{"final":{"medial":"MED_I"}}"#).unwrap();
        assert_eq!(syl, Syllable::new(Medial::I));
        assert!(syl.is_null_initial());
    }

    #[test]
    fn json_rejects_out_of_range_tone() {
        let r = serde_json::from_str::<Tone>(r#"{"citation":9}"#);
        assert!(r.is_err());
    }
}
