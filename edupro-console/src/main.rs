//! EduPro Connect administrative console
//!
//! Thin terminal front end over `edupro-client`: each subcommand calls one
//! service and prints the result.

mod cli;
mod commands;
mod logger;
mod render;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match commands::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "unhandled failure");
            eprintln!("{}", failure_screen(&e));
            ExitCode::FAILURE
        }
    }
}

/// Text shown when a failure escapes the command layer
fn failure_screen(e: &anyhow::Error) -> String {
    format!("Something went wrong\n  {e:#}\nTry again, or run with --verbose for details.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_client::ClientError;

    #[test]
    fn test_failure_screen_shows_cause_chain_and_retry_hint() {
        let err = anyhow::Error::new(ClientError::Config("EDUPRO_API_URL must be set".into()))
            .context("Failed to start");
        let screen = failure_screen(&err);
        let lines: Vec<&str> = screen.lines().collect();
        assert_eq!(lines[0], "Something went wrong");
        assert_eq!(
            lines[1],
            "  Failed to start: Configuration error: EDUPRO_API_URL must be set"
        );
        assert!(lines[2].starts_with("Try again"));
    }
}
