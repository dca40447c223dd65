//! Duffus inventory.
//!
//! Kept apart from the catalog: Duffus writes ṳ for the unrounded back vowel
//! and otherwise follows the Tie-lo consonants. The matches are exhaustive
//! over the terminal enums, so a new terminal does not compile until it has
//! a Duffus spelling, and a catalog row naming an unknown symbol fails to
//! load.

use crate::terminal::{CodaNasal, CodaStop, Initial, Medial, Terminal};

pub(super) fn spelling(terminal: Terminal) -> Option<&'static str> {
    Some(match terminal {
        Terminal::Initial(i) => initial(i),
        Terminal::Medial(m) => medial(m),
        Terminal::CodaStop(c) => match c {
            CodaStop::P => "p",
            CodaStop::K => "k",
            CodaStop::H => "h",
            CodaStop::T => "t",
        },
        Terminal::CodaNasal(c) => match c {
            CodaNasal::M => "m",
            CodaNasal::Ng => "ng",
            CodaNasal::N => "n",
        },
    })
}

fn initial(i: Initial) -> &'static str {
    match i {
        Initial::Bh => "b",
        Initial::P => "ph",
        Initial::B => "p",
        Initial::M => "m",
        Initial::Ng => "ng",
        Initial::N => "n",
        Initial::Gh => "g",
        Initial::K => "kh",
        Initial::G => "k",
        Initial::D => "t",
        Initial::T => "th",
        Initial::Z => "ts",
        Initial::C => "tsh",
        Initial::S => "s",
        Initial::H => "h",
        Initial::R => "z",
        Initial::L => "l",
    }
}

fn medial(m: Medial) -> &'static str {
    match m {
        Medial::Ai => "ai",
        Medial::Au => "au",
        Medial::Ia => "ia",
        Medial::Iau => "iau",
        Medial::Ieu => "ieu",
        Medial::Iou => "iou",
        Medial::Iu => "iu",
        Medial::Ie => "ie",
        Medial::Io => "io",
        Medial::Oi => "oi",
        Medial::Ou => "ou",
        Medial::Uai => "uai",
        Medial::Ua => "ua",
        Medial::Ue => "ue",
        Medial::Ui => "ui",
        Medial::A => "a",
        Medial::V => "\u{1e73}",
        Medial::E => "e",
        Medial::I => "i",
        Medial::O => "o",
        Medial::U => "u",
        Medial::M => "m",
        Medial::Ng => "ng",
    }
}
