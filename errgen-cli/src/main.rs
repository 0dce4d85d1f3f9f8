use clap::Parser;
use errgen_cli::{Cli, execute, usage_exit_code};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("eg=info,errgen=info,errgen_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(e.kind()));
        }
    };
    if let Err(e) = execute(cli) {
        debug!(error = ?e, "Failed to generate errors");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
