use std::collections::BTreeSet;

use super::*;
use crate::terminal::CodaStop;

fn gak8() -> Sentence {
    syl(Initial::G, Medial::A, 8).with_coda(CodaStop::K).into()
}

#[test]
fn test_seven_distinct_renderings() {
    let expected = [
        (Scheme::Gdpi, "gag8"),
        (Scheme::Ggnn, "gak8"),
        (Scheme::Tlo, "ka\u{302}k"),
        (Scheme::Duffus, "ka\u{307}k"),
        (Scheme::Sinwz, "gaq8"),
        (Scheme::Zapngou, "【求江下入】"),
        (Scheme::Tailo, "ka\u{30d}k"),
    ];
    for (scheme, out) in expected {
        assert_eq!(render(scheme, gak8()), out, "{scheme}");
    }

    let distinct: BTreeSet<String> = Scheme::ALL.iter().map(|&s| render(s, gak8())).collect();
    assert_eq!(distinct.len(), 7);
}

#[test]
fn test_rendering_is_deterministic() {
    for scheme in Scheme::ALL {
        assert_eq!(render(scheme, gak8()), render(scheme, gak8()));
    }
}

#[test]
fn test_renderers_share_catalog_across_threads() {
    let cat = TerminalCatalog::bundled();
    let sentence = gak8();
    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = Scheme::ALL
            .iter()
            .map(|&scheme| {
                let sentence = &sentence;
                s.spawn(move || Renderer::new(scheme, cat).render(sentence).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let sequential: Vec<String> = Scheme::ALL.iter().map(|&s| render(s, gak8())).collect();
    assert_eq!(outputs, sequential);
}
