use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;
use treedump::cli::Cli;
use treedump::config::Config;
use treedump::output::{self, OutputTarget, Sink, Verbosity};
use treedump::render::{self, RenderOptions};

fn main() {
    if let Err(e) = run() {
        output::error(&format!("Error: {e:#}"));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let verbosity = cli.verbosity();
    output::set_verbosity(verbosity);
    init_logging(verbosity);

    let config_path = Config::locate(cli.config.as_deref());
    if let Some(path) = &config_path {
        output::verbose(&format!("Using config file {}", path.display()));
    }
    let config = Config::load(config_path.as_deref())?;

    let roots = config.resolve_roots(&cli.directories);
    let target = config.resolve_output(cli.output_target());
    let options = RenderOptions {
        sort: cli.sort || config.sort,
    };

    output::info(&format!("Listing {} into {target}", roots.join(", ")));

    let mut sink = Sink::open(&target)?;
    render::render_with(&roots, &mut sink, &options)?;
    sink.finish()?;

    if let OutputTarget::File(path) = &target {
        println!("Structure saved to {}", path.display());
    }

    Ok(())
}

/// Installs the stderr log subscriber. `TREEDUMP_LOG` overrides the level.
fn init_logging(verbosity: Verbosity) {
    let default_level = if verbosity == Verbosity::Verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(treedump::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
