use piest::{Config, Report};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("piest=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let mut rng = config.rng();

    match Report::run(&config, &mut rng) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(non_convergence = err.is_non_convergence(), "{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
