use super::*;
use crate::terminal::{CodaNasal, CodaStop};
use crate::tree::Syllable;

#[test]
fn test_initial_and_final_characters() {
    let s = syl(Initial::L, Medial::A, 5).with_coda(CodaNasal::Ng);
    assert_eq!(render(Scheme::Zapngou, s), "【柳江下平】");
}

#[test]
fn test_null_initial_gets_ying() {
    let s = Syllable::new(Medial::U).with_coda(CodaNasal::Ng).with_tone(tone(1));
    assert_eq!(render(Scheme::Zapngou, s), "【英君上平】");
}

#[test]
fn test_recognized_initial_gets_no_ying() {
    let out = render(Scheme::Zapngou, syl(Initial::L, Medial::I, 1));
    assert_eq!(out, "【柳枝上平】");
    assert!(!out.contains('英'));
}

#[test]
fn test_merged_initial_label() {
    let s = syl(Initial::N, Medial::A, 1).with_coda(CodaNasal::Ng);
    assert_eq!(render(Scheme::Zapngou, s), "【柳(n)江上平】");
}

#[test]
fn test_unknown_final_echoed() {
    let s = syl(Initial::K, Medial::Ua, 2).with_coda(CodaNasal::M);
    assert_eq!(render(Scheme::Zapngou, s), "【去uam上上】");
}

#[test]
fn test_unknown_final_without_initial() {
    let s = Syllable::new(Medial::Ua).with_coda(CodaNasal::M).with_tone(tone(2));
    assert_eq!(render(Scheme::Zapngou, s), "【英uam上上】");
}

#[test]
fn test_nasalized_final() {
    let s = syl(Initial::S, Medial::Uai, 1).nasalized();
    assert_eq!(render(Scheme::Zapngou, s), "【時乖（鼻）上平】");
    let s = syl(Initial::G, Medial::Io, 4).nasalized().with_coda(CodaStop::H);
    assert_eq!(render(Scheme::Zapngou, s), "【求薑上入】");
}

#[test]
fn test_t_and_n_merge_before_lookup() {
    let t = syl(Initial::B, Medial::A, 4).with_coda(CodaStop::T);
    assert_eq!(render(Scheme::Zapngou, t), "【邊江上入】");
    let n = syl(Initial::S, Medial::I, 1).with_coda(CodaNasal::N);
    assert_eq!(render(Scheme::Zapngou, n), "【時斤上平】");
}

#[test]
fn test_toneless_and_neutral_tone() {
    let toneless = Syllable::new(Medial::A)
        .with_initial(Initial::L)
        .with_coda(CodaNasal::Ng);
    assert_eq!(render(Scheme::Zapngou, toneless), "【柳江】");
    let neutral = syl(Initial::L, Medial::A, 0).with_coda(CodaNasal::Ng);
    assert_eq!(render(Scheme::Zapngou, neutral), "【柳江】");
}

#[test]
fn test_separators_vanish() {
    let mut w = Word::default();
    w.push_syllable(syl(Initial::D, Medial::E, 7))
        .push_separator("-")
        .push_syllable(syl(Initial::Gh, Medial::E, 2))
        .push_syllable(Syllable::new(Medial::A).with_tone(tone(1)));
    assert_eq!(render_word(Scheme::Zapngou, &w), "【地家下去】【語家上上】【英膠上平】");
}

#[test]
fn test_dieghv_alias_renders_the_same() {
    let s: Sentence = syl(Initial::H, Medial::O, 2).into();
    let by_alias = crate::transliterate(&s, "dieghv", TerminalCatalog::bundled()).unwrap();
    assert_eq!(by_alias, render(Scheme::Zapngou, s));
}
