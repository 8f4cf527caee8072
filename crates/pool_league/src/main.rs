//! Pool league CLI
//!
//! Record match results and show rankings, history and player statistics.

use pool_league::{execute, usage, Command, PoolConfig, PoolError};
use std::env;
use std::process::ExitCode;
use tracing::Level;

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &[String]) -> Result<(), PoolError> {
    let config = PoolConfig::from_env()?;
    init_logging(config.log_level()?);

    let command = Command::parse(args)?;
    let stdout = std::io::stdout();
    execute(&command, &config, &mut stdout.lock())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ PoolError::Usage(_)) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage());
            ExitCode::from(e.exit_code() as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
