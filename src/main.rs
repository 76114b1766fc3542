//! go-outline - print the structural outline of a Go file as JSON.
//!
//! Exit codes:
//! - 0: Success, outline written to stdout
//! - 1: Usage, read or parse error (diagnostic on stderr, nothing on stdout)

use std::io::{self, Write};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use go_outline::cli::Cli;
use go_outline::extractors::SourceOrigin;
use go_outline::{to_json, GoExtractor, OutlineError, OutlineManager};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("go_outline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("go-outline: {:#}", e);
            if matches!(e.downcast_ref::<OutlineError>(), Some(OutlineError::Usage)) {
                eprintln!("{}", Cli::command().render_help());
            }
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let request = cli.source_request();
    let manager = OutlineManager::new();

    let tree = match request.origin() {
        Ok(SourceOrigin::Inline(_)) => manager
            .ingest(&request)
            .context("could not parse source")?,
        Ok(SourceOrigin::File(path)) => manager
            .ingest(&request)
            .with_context(|| format!("could not parse file with name {:?}", path))?,
        Err(e) => return Err(e.into()),
    };

    let mut extractor = GoExtractor::new(tree.file_name());
    let outline = extractor.extract_outline(&tree);
    if !extractor.warnings().is_empty() {
        tracing::debug!("{} declarations skipped", extractor.warnings().len());
    }

    let json = to_json(&outline).context("could not render outline")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("could not write outline")?;
    Ok(())
}
