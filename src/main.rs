use nestkv::{Shell, ShellConfig};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match ShellConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout only carries replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new(config);

    if let Err(e) = shell.run(io::stdin().lock(), io::stdout().lock(), interactive) {
        error!("Shell error: {:#}", e);
        std::process::exit(1);
    }
}
