//! Command-line entry point: reads the server address from the environment,
//! runs one verification and exits non-zero if it fails.

use std::error::Error as StdError;
use std::process::ExitCode;

use log::{error, info};

use streamer_friendly::{Config, Report, Result};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn exit_code(outcome: Result<Report>) -> ExitCode {
    match outcome {
        Ok(report) if report.passed() => {
            info!("{}", report);
            ExitCode::SUCCESS
        }
        Ok(report) => {
            for failure in &report.failures {
                error!("{}: {}", report.group, failure);
            }
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::from(2)
        }
    }
}

#[cfg(not(feature = "async"))]
fn main() -> ExitCode {
    init_logger();

    let outcome = Config::from_env().and_then(|config| {
        info!("verifying {} against {:?}", config.endpoint, config.expected_name);
        streamer_friendly::run(&config)
    });

    exit_code(outcome)
}

#[cfg(feature = "async")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();

    let outcome = match Config::from_env() {
        Ok(config) => {
            info!("verifying {} against {:?}", config.endpoint, config.expected_name);
            streamer_friendly::run(&config).await
        }
        Err(e) => Err(e),
    };

    exit_code(outcome)
}
