mod divergence;
mod rime_table;

use crate::catalog::TerminalCatalog;
use crate::scheme::Scheme;
use crate::terminal::{Initial, Medial};
use crate::tree::{Sentence, Syllable, Tone, Word};

use super::Renderer;

pub(super) fn renderer(scheme: Scheme) -> Renderer<'static> {
    Renderer::new(scheme, TerminalCatalog::bundled())
}

pub(super) fn tone(citation: u8) -> Tone {
    Tone::new(citation).unwrap()
}

/// Syllable with an initial, a medial and a citation tone.
pub(super) fn syl(initial: Initial, medial: Medial, citation: u8) -> Syllable {
    Syllable::new(medial)
        .with_initial(initial)
        .with_tone(tone(citation))
}

pub(super) fn render(scheme: Scheme, sentence: impl Into<Sentence>) -> String {
    renderer(scheme).render(&sentence.into()).unwrap()
}

pub(super) fn render_word(scheme: Scheme, word: &Word) -> String {
    renderer(scheme).render_word(word).unwrap()
}
