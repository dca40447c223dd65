use crate::catalog::TerminalCatalog;
use crate::scheme::Scheme;
use crate::terminal::Terminal;

use super::Renderer;

/// Catalog terminals that `scheme` cannot spell.
///
/// For Sinwenz this is the catalog rows its own table leaves out. Duffus
/// spells every terminal, so it never reports anything. For catalog-driven
/// schemes it lists gaps in the scheme's column that no merge covers.
pub fn reconcile(catalog: &TerminalCatalog, scheme: Scheme) -> Vec<Terminal> {
    let renderer = Renderer::new(scheme, catalog);
    catalog
        .terminals()
        .filter(|t| renderer.spell(*t).is_err())
        .collect()
}
