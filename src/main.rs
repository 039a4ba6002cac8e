#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use restaurant_site::build_cmd;
use restaurant_site::config::{Overrides, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "restaurant-site")]
#[command(about = "Generate a static restaurant site from a CSV dataset", long_about = None)]
struct Cli {
    /// Path to the CSV dataset [default: restaurants.csv]
    #[arg(long, value_name = "CSV")]
    input: Option<std::path::PathBuf>,
    /// Output directory for the generated site [default: docs]
    #[arg(long, value_name = "DIR")]
    output: Option<std::path::PathBuf>,
    /// TOML config file; command-line options take precedence
    #[arg(long, value_name = "site.toml")]
    config: Option<std::path::PathBuf>,
    /// Column holding the restaurant name
    #[arg(long)]
    name_column: Option<String>,
    /// Tidy scraped cells (multi-line values, separator dots, icon glyphs)
    #[arg(long)]
    clean_cells: bool,
    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "restaurant_site=debug"
    } else if quiet {
        "restaurant_site=warn"
    } else {
        "restaurant_site=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(filter))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let overrides = Overrides {
        input: cli.input,
        output: cli.output,
        name_column: cli.name_column,
        clean_cells: cli.clean_cells,
    };

    let result = SiteConfig::resolve(cli.config.as_deref(), overrides).and_then(|config| {
        tracing::debug!(?config, "resolved config");
        build_cmd::run(&config).map(|report| (config, report))
    });

    match result {
        Ok((config, report)) => {
            println!(
                "Generated {} restaurant page(s) in {}",
                report.written.len(),
                config.output.dir.display()
            );
        }
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
