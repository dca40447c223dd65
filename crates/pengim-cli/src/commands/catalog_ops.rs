use std::collections::BTreeSet;

use pengim_core::catalog::default_toml;
use pengim_core::render::reconcile;
use pengim_core::scheme::{Family, Scheme};
use pengim_core::terminal::Category;
use pengim_core::TerminalCatalog;

use super::die;
use crate::input::load_catalog;

pub fn catalog_export() {
    print!("{}", default_toml());
}

pub fn catalog_validate(file: &str) {
    let catalog = die!(load_catalog(Some(file)), "Error: {}");
    let schemes: BTreeSet<&str> = catalog
        .terminals()
        .flat_map(|t| catalog.schemes_for(t))
        .collect();
    println!(
        "OK: {} terminals, schemes: {}",
        catalog.len(),
        schemes.into_iter().collect::<Vec<_>>().join(", ")
    );
    for (category, count) in category_counts(&catalog) {
        println!("  {:<11} {count}", category.section());
    }
}

/// Number of catalog rows in each section, in file order.
pub fn category_counts(catalog: &TerminalCatalog) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&c| (c, catalog.terminals().filter(|t| t.category() == c).count()))
        .collect()
}

pub fn schemes_cmd() {
    for scheme in Scheme::ALL {
        let family = match scheme.family() {
            Family::PlainDigits => "tone digits",
            Family::Diacritic => "tone diacritics",
            Family::Sinwenz => "tone digits, glides",
            Family::RimeTable => "rime-table characters",
        };
        let column = scheme.catalog_key().unwrap_or("(hardcoded)");
        println!("{:<8} {:<22} {}", scheme.id(), family, column);
    }
}

/// Report terminals each scheme cannot spell. Catalog rows with unknown
/// symbols are rejected while loading.
pub fn reconcile_cmd(catalog: Option<&str>) {
    let catalog = die!(load_catalog(catalog), "Error loading catalog: {}");
    for scheme in Scheme::ALL {
        let missing = reconcile(&catalog, scheme);
        if missing.is_empty() {
            println!("{scheme}: OK");
            continue;
        }
        let names: Vec<&str> = missing.iter().map(|t| t.symbol()).collect();
        println!("{scheme}: no spelling for {}", names.join(", "));
    }
}
