//! Sinwenz inventory and glide spelling.

use crate::error::RenderError;
use crate::terminal::{CodaNasal, CodaStop, Initial, Medial, Terminal};

/// Nasalization is a combining tilde on the preceding vowel.
pub(super) const NASAL_TILDE: &str = "\u{303}";

/// Sinwenz has no -t; every other terminal has a spelling.
pub(super) fn spelling(terminal: Terminal) -> Option<&'static str> {
    match terminal {
        Terminal::Initial(i) => Some(initial(i)),
        Terminal::Medial(m) => Some(medial(m)),
        Terminal::CodaStop(c) => match c {
            CodaStop::P => Some("p"),
            CodaStop::K | CodaStop::H => Some("q"),
            CodaStop::T => None,
        },
        Terminal::CodaNasal(c) => Some(match c {
            CodaNasal::M => "m",
            CodaNasal::Ng => "ng",
            CodaNasal::N => "n",
        }),
    }
}

fn initial(i: Initial) -> &'static str {
    match i {
        Initial::Bh => "bh",
        Initial::P => "p",
        Initial::B => "b",
        Initial::M => "m",
        Initial::Ng => "ng",
        Initial::N => "n",
        Initial::Gh => "gh",
        Initial::K => "k",
        Initial::G => "g",
        Initial::D => "d",
        Initial::T => "t",
        Initial::Z => "z",
        Initial::C => "c",
        Initial::S => "s",
        Initial::H => "x",
        Initial::R => "dz",
        Initial::L => "l",
    }
}

fn medial(m: Medial) -> &'static str {
    match m {
        Medial::Ai => "ai",
        Medial::Au => "ao",
        Medial::Ia => "ia",
        Medial::Iau | Medial::Ieu | Medial::Iou => "iao",
        Medial::Iu => "iu",
        Medial::Ie | Medial::Io => "io",
        Medial::Oi => "oi",
        Medial::Ou => "ou",
        Medial::Uai => "uai",
        Medial::Ua => "ua",
        Medial::Ue => "ue",
        Medial::Ui => "ui",
        Medial::A => "a",
        Medial::V => "y",
        Medial::E => "e",
        Medial::I => "i",
        Medial::O => "o",
        Medial::U => "u",
        Medial::M => "m",
        Medial::Ng => "ng",
    }
}

/// Word-initial i and u are written j and w, unless they are the whole
/// syllable. Applied to the assembled syllable, tone digit included.
pub(super) fn apply_glide(syllable: String) -> Result<String, RenderError> {
    let mut chars = syllable.chars();
    let glide = match chars.next() {
        Some('i') => 'j',
        Some('u') => 'w',
        Some(_) => return Ok(syllable),
        None => {
            return Err(RenderError::MalformedSyllable {
                reason: "empty syllable",
            })
        }
    };
    if chars.next().is_none() {
        return Ok(syllable);
    }

    let mut out = String::with_capacity(syllable.len());
    out.push(glide);
    out.push_str(&syllable[1..]);
    Ok(out)
}
