mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use error::{exit_with_error, CliError};

fn init_tracing(cli: &Cli) {
    // --quiet  → "off" regardless of RUST_LOG
    // --verbose → "debug" for segtrie unless RUST_LOG overrides
    // default  → RUST_LOG, falling back to "off"
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "segtrie=debug".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "off".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Compile { txt, out } => commands::compile(txt, out),
        Commands::Match { dict, word } => commands::exact_match(dict, word),
        Commands::Prefixes { dict, word } => commands::prefixes(dict, word),
        Commands::LongestPrefix { dict, word } => commands::longest_prefix(dict, word),
        Commands::HasPrefix { dict, word } => commands::has_prefix(dict, word),
        Commands::Segment { dict, mode, text } => commands::segment(dict, *mode, text),
        Commands::Stats { dict } => commands::stats(dict),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
