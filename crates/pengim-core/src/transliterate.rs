use crate::catalog::TerminalCatalog;
use crate::error::{RenderError, TransliterateError};
use crate::render::Renderer;
use crate::scheme::Scheme;
use crate::tree::Sentence;

/// Render `sentence` into the scheme named `scheme_id`.
///
/// The id is resolved before anything is rendered.
pub fn transliterate(
    sentence: &Sentence,
    scheme_id: &str,
    catalog: &TerminalCatalog,
) -> Result<String, TransliterateError> {
    let scheme: Scheme = scheme_id.parse()?;
    Ok(Renderer::new(scheme, catalog).render(sentence)?)
}

/// Render `sentence` into every scheme, in [`Scheme::ALL`] order. A failure
/// in one scheme does not affect the others.
pub fn transliterate_all(
    sentence: &Sentence,
    catalog: &TerminalCatalog,
) -> Vec<(Scheme, Result<String, RenderError>)> {
    Scheme::ALL
        .iter()
        .map(|&scheme| (scheme, Renderer::new(scheme, catalog).render(sentence)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::UnknownScheme;
    use crate::terminal::{CodaStop, Initial, Medial};
    use crate::tree::{Syllable, Tone};

    fn kak8() -> Sentence {
        Syllable::new(Medial::A)
            .with_initial(Initial::G)
            .with_coda(CodaStop::K)
            .with_tone(Tone::new(8).unwrap())
            .into()
    }

    #[test]
    fn by_id() {
        let cat = TerminalCatalog::bundled();
        assert_eq!(transliterate(&kak8(), "ggnn", cat).unwrap(), "gak8");
        assert_eq!(transliterate(&kak8(), "dieghv", cat).unwrap(), "【求江下入】");
    }

    #[test]
    fn unknown_id_fails_before_rendering() {
        let cat = TerminalCatalog::bundled();
        let err = transliterate(&kak8(), "wadegiles", cat).unwrap_err();
        assert_eq!(
            err,
            TransliterateError::UnknownScheme(UnknownScheme("wadegiles".into()))
        );
    }

    #[test]
    fn render_errors_pass_through() {
        let cat = TerminalCatalog::bundled();
        let sentence: Sentence = Syllable::new(Medial::A).with_coda(CodaStop::T).into();
        let err = transliterate(&sentence, "sinwz", cat).unwrap_err();
        assert!(matches!(err, TransliterateError::Render(_)));
    }

    #[test]
    fn all_schemes_in_order() {
        let cat = TerminalCatalog::bundled();
        let out = transliterate_all(&kak8(), cat);
        let schemes: Vec<Scheme> = out.iter().map(|(s, _)| *s).collect();
        assert_eq!(schemes, Scheme::ALL.to_vec());
        assert!(out.iter().all(|(_, r)| r.is_ok()));
    }

    #[test]
    fn one_failing_scheme_does_not_hide_others() {
        let cat = TerminalCatalog::bundled();
        let sentence: Sentence = Syllable::new(Medial::V)
            .with_initial(Initial::K)
            .with_tone(Tone::new(1).unwrap())
            .into();
        let out = transliterate_all(&sentence, cat);
        for (scheme, result) in out {
            if scheme == Scheme::Tailo {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "{scheme}: {result:?}");
            }
        }
    }
}
