use pengim_core::scheme::Scheme;
use pengim_core::tree::Sentence;
use pengim_core::{transliterate_all, RenderError, Renderer, TerminalCatalog};
use tracing::debug;

use super::die;
use crate::input::{load_catalog, parse_sentences, read_input};

fn load(input: Option<&str>, catalog: Option<&str>) -> (Vec<Sentence>, TerminalCatalog) {
    let catalog = die!(load_catalog(catalog), "Error loading catalog: {}");
    let text = die!(read_input(input), "Error: {}");
    let sentences = die!(parse_sentences(&text), "Error: {}");
    let syllables: usize = sentences
        .iter()
        .flat_map(|s| s.words())
        .map(|w| w.syllables().count())
        .sum();
    debug!(sentences = sentences.len(), syllables, terminals = catalog.len(), "input loaded");
    (sentences, catalog)
}

/// Render each input sentence into one scheme, one line per sentence.
pub fn render_cmd(scheme: &str, input: Option<&str>, catalog: Option<&str>) {
    let scheme = die!(scheme.parse::<Scheme>(), "Error: {}");
    let (sentences, catalog) = load(input, catalog);
    let renderer = Renderer::new(scheme, &catalog);
    for sentence in &sentences {
        println!("{}", die!(renderer.render(sentence), "Error: {}"));
    }
}

/// Render each input sentence into every scheme, tab-separated. Each block
/// starts with an `INPUT` line echoing the sentence as compact JSON.
pub fn all_cmd(input: Option<&str>, catalog: Option<&str>) {
    let (sentences, catalog) = load(input, catalog);
    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", die!(input_header(sentence), "Error: {}"));
        print!("{}", format_all(&transliterate_all(sentence, &catalog)));
    }
}

pub fn input_header(sentence: &Sentence) -> Result<String, serde_json::Error> {
    Ok(format!("INPUT\t{}", serde_json::to_string(sentence)?))
}

/// One `scheme<TAB>output` line per scheme; failures show the error.
pub fn format_all(results: &[(Scheme, Result<String, RenderError>)]) -> String {
    let mut out = String::new();
    for (scheme, result) in results {
        match result {
            Ok(text) => out.push_str(&format!("{scheme}\t{text}\n")),
            Err(e) => out.push_str(&format!("{scheme}\tERROR: {e}\n")),
        }
    }
    out
}
