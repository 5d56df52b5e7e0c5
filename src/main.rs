use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Publish a directory of Markdown files as a static HTML site")]
struct Cli {
    /// Base path the site is served under (defaults to the configured one, or "/")
    base_path: Option<String>,

    /// Site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Log each generated page
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli) {
        Ok((pages, output)) => println!("Published {} page(s) to {}", pages, output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(usize, PathBuf), mdsite::Error> {
    // Load config, letting the positional base path win over the file
    let config = Config::load(&cli.config)?.with_base_path(cli.base_path);

    // Copy static assets, then render every page
    let pages = mdsite::publish(&config)?;
    Ok((pages, config.paths.output))
}
