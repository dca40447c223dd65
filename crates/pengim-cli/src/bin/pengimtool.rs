use clap::{Parser, Subcommand};

use pengim_cli::commands::{catalog_ops, render_ops};
use pengim_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "pengimtool", about = "Teochew romanization rendering tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render JSON parse trees into one scheme
    Render {
        /// Output scheme (gdpi, ggnn, tlo, duffus, sinwz, zapngou/dieghv, tailo)
        #[arg(short, long, default_value = "tlo")]
        scheme: String,
        /// Input file of JSON sentences (default: stdin)
        input: Option<String>,
        /// Custom terminal catalog (.toml or .json)
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Render JSON parse trees into every scheme, tab-separated
    All {
        /// Input file of JSON sentences (default: stdin)
        input: Option<String>,
        /// Custom terminal catalog (.toml or .json)
        #[arg(long)]
        catalog: Option<String>,
    },
    /// List output schemes
    Schemes,
    /// Export the bundled terminal catalog as TOML
    CatalogExport,
    /// Validate a terminal catalog file
    CatalogValidate {
        /// Path to the .toml or .json file
        file: String,
    },
    /// Report terminals each scheme cannot spell
    Reconcile {
        /// Custom terminal catalog (.toml or .json)
        #[arg(long)]
        catalog: Option<String>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            scheme,
            input,
            catalog,
        } => render_ops::render_cmd(&scheme, input.as_deref(), catalog.as_deref()),
        Command::All { input, catalog } => {
            render_ops::all_cmd(input.as_deref(), catalog.as_deref())
        }
        Command::Schemes => catalog_ops::schemes_cmd(),
        Command::CatalogExport => catalog_ops::catalog_export(),
        Command::CatalogValidate { file } => catalog_ops::catalog_validate(&file),
        Command::Reconcile { catalog } => catalog_ops::reconcile_cmd(catalog.as_deref()),
    }
}
