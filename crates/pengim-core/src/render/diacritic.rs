//! Combining tone marks for the Tie-lo family.

use crate::error::RenderError;
use crate::scheme::Scheme;

// Indexed by tone digit 0..=8. Tones 0, 1 and 4 are unmarked.
const TLO_MARKS: [&str; 9] = [
    "", "", "\u{301}", "\u{300}", "", "\u{302}", "\u{306}", "\u{304}", "\u{302}",
];
const DUFFUS_MARKS: [&str; 9] = [
    "", "", "\u{301}", "\u{300}", "", "\u{302}", "\u{303}", "\u{304}", "\u{307}",
];
const TAILO_MARKS: [&str; 9] = [
    "", "", "\u{301}", "\u{300}", "", "\u{302}", "\u{306}", "\u{304}", "\u{30d}",
];

/// Combining mark for `citation` under `scheme`; empty for unmarked tones
/// and for schemes that do not mark tone with diacritics.
pub fn tone_mark(scheme: Scheme, citation: u8) -> &'static str {
    let table = match scheme {
        Scheme::Tlo => &TLO_MARKS,
        Scheme::Duffus => &DUFFUS_MARKS,
        Scheme::Tailo => &TAILO_MARKS,
        _ => return "",
    };
    table.get(usize::from(citation)).copied().unwrap_or("")
}

/// Insert `mark` after the first ASCII vowel letter of `body`, or after its
/// first character when the body has no vowel (syllabic m, ng).
pub fn place_tone_mark(body: &str, mark: &str) -> Result<String, RenderError> {
    let Some(first) = body.chars().next() else {
        return Err(RenderError::MalformedSyllable {
            reason: "empty syllable body",
        });
    };

    let at = match body.find(|c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
        Some(i) => i + 1,
        None => first.len_utf8(),
    };

    let mut out = String::with_capacity(body.len() + mark.len());
    out.push_str(&body[..at]);
    out.push_str(mark);
    out.push_str(&body[at..]);
    Ok(out)
}
