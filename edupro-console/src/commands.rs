//! Command execution
//!
//! Client failures are caught here and reported as a one-line notification
//! with a failing exit code. Anything else propagates to `main`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use edupro_client::config::{API_URL_ENV, SESSION_FILE_ENV};
use edupro_client::{
    AcademicApi, ApiClient, ClientConfig, ClientError, CommunicationApi, DashboardApi, FilePart,
    FileTokenStore, FinancialApi, GuardDecision, Navigator, RouteGuard, TokenStore, UsersApi,
};

use crate::cli::{Cli, Command, FeesCommand, ListArgs, ListCommand, StudentsCommand};
use crate::render;

/// Session file used when none is configured
pub const DEFAULT_SESSION_FILE: &str = ".edupro/session.json";

/// Tells the operator the session is gone
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "session ended");
        eprintln!("Signed out. Run `edupro login <username>` to start a new session.");
    }
}

/// Build the client configuration, command-line values first
pub fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let session_file = session_file(cli);
    let config = ClientConfig::from_lookup(|key| match key {
        API_URL_ENV => cli.api_url.clone(),
        SESSION_FILE_ENV => Some(session_file.display().to_string()),
        _ => std::env::var(key).ok(),
    })?;
    Ok(config)
}

fn session_file(cli: &Cli) -> PathBuf {
    cli.session_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
}

/// Run the parsed command
pub async fn run(cli: Cli) -> Result<ExitCode> {
    if let Command::Route { path } = &cli.command {
        let tokens = FileTokenStore::open(session_file(&cli));
        route(path, &tokens);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let client = config
        .build_client()?
        .with_navigator(Arc::new(ConsoleNavigator));
    tracing::debug!(base_url = client.base_url(), "client ready");

    match settle(execute(&client, cli.command).await)? {
        None => Ok(ExitCode::SUCCESS),
        Some(line) => {
            eprintln!("{line}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Split a command result into a notification line (client failures) or an
/// error for the failure screen (everything else)
pub fn settle(result: Result<()>) -> Result<Option<String>> {
    match result {
        Ok(()) => Ok(None),
        Err(e) => match e.downcast::<ClientError>() {
            Ok(client_error) => Ok(Some(toast(&client_error))),
            Err(other) => Err(other),
        },
    }
}

/// One-line notification for a failed call
fn toast(err: &ClientError) -> String {
    tracing::debug!(error = ?err, "command failed");
    let message = err.user_message().replace('\n', "; ");
    match err.status() {
        Some(status) => format!("✖ {message} ({status})"),
        None => format!("✖ {message}"),
    }
}

fn route(path: &str, tokens: &dyn TokenStore) {
    match RouteGuard::default().check(path, tokens) {
        GuardDecision::Allow => println!("{path}: allowed"),
        GuardDecision::Redirect(to) => println!("{path}: redirect to {to}"),
    }
}

async fn execute(client: &ApiClient, command: Command) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => read_password()?,
            };
            client.login(&username, &password).await?;
            let user = client.me().await?;
            println!("Signed in as {}", user.display_name());
        }
        Command::Logout => client.logout(),
        Command::Me => {
            let user = client.me().await?;
            println!("{} ({})", user.display_name(), user.username);
            if let Some(email) = &user.email {
                println!("{email}");
            }
            if let Some(role) = &user.role {
                println!("role: {role}");
            }
        }
        Command::Dashboard => {
            let stats = client.dashboard_stats().await?;
            println!("{}", render::dashboard(&stats));
        }
        Command::Students { command } => match command {
            StudentsCommand::List(args) => {
                let page = client.students().list(&args.to_query()).await?;
                println!("{}", render::page(&page));
            }
            StudentsCommand::Show { id } => {
                let student = client.students().get(id).await?;
                println!("{}", render::student(&student));
            }
            StudentsCommand::Delete { id } => {
                client.students().delete(id).await?;
                println!("Student #{id} deleted");
            }
        },
        Command::Teachers { command } => {
            let page = client.teachers().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Classes { command } => {
            let page = client.classrooms().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Subjects { command } => {
            let page = client.subjects().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Grades { command } => {
            let page = client.grades().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Events { command } => {
            let page = client.events().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Notices { command } => {
            let page = client.notices().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Users { command } => {
            let page = client.users().list(&list_args(command).to_query()).await?;
            println!("{}", render::page(&page));
        }
        Command::Fees { command } => fees(client, command).await?,
        Command::Route { path } => route(&path, client.tokens().as_ref()),
    }
    Ok(())
}

fn list_args(command: ListCommand) -> ListArgs {
    match command {
        ListCommand::List(args) => args,
    }
}

async fn fees(client: &ApiClient, command: FeesCommand) -> Result<()> {
    match command {
        FeesCommand::List { list, status } => {
            let mut query = list.to_query();
            if let Some(status) = status {
                query = query.filter("status", status);
            }
            let page = client.fees().list(&query).await?;
            println!("{}", render::page(&page));
        }
        FeesCommand::Summary => {
            let summary = client.fee_summary().await?;
            println!("{}", render::fee_summary(&summary));
        }
        FeesCommand::UploadProof { id, file } => {
            let part = FilePart::from_path(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let fee = client.upload_fee_proof(id, part).await?;
            println!(
                "Proof attached to fee #{}: {}",
                fee.id,
                fee.payment_proof.as_deref().unwrap_or("(pending review)")
            );
        }
        FeesCommand::Pay { id, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let fee = client.mark_fee_paid(id, date).await?;
            println!("Fee #{} is {} ({})", fee.id, fee.status, date);
        }
    }
    Ok(())
}

fn read_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
