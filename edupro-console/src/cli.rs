//! Command-line interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shared::ListQuery;
use shared::models::FeeStatus;

/// edupro: administrative console for EduPro Connect
#[derive(Debug, Parser)]
#[command(name = "edupro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "EDUPRO_API_URL")]
    pub api_url: Option<String>,

    /// Cookie file holding the session tokens
    #[arg(long, global = true, env = "EDUPRO_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        username: String,

        /// Read from stdin when omitted
        #[arg(long, env = "EDUPRO_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Me,

    /// Academic and financial indicators
    Dashboard,

    /// Student registry
    Students {
        #[command(subcommand)]
        command: StudentsCommand,
    },

    /// Teacher registry
    Teachers {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Classrooms
    Classes {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Subjects
    Subjects {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Grades
    Grades {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Calendar events
    Events {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Notices
    Notices {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Console users
    Users {
        #[command(subcommand)]
        command: ListCommand,
    },

    /// Monthly fees
    Fees {
        #[command(subcommand)]
        command: FeesCommand,
    },

    /// Check where the route guard sends a path
    Route { path: String },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List one page
    List(ListArgs),
}

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    /// List one page
    List(ListArgs),

    /// Show a single student
    Show { id: i64 },

    /// Delete a student
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum FeesCommand {
    /// List one page
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only fees in this status (pending, paid, overdue, cancelled)
        #[arg(long)]
        status: Option<FeeStatus>,
    },

    /// Totals per status
    Summary,

    /// Attach a payment proof file to a fee
    UploadProof { id: i64, file: PathBuf },

    /// Mark a fee as paid
    Pay {
        id: i64,

        /// Payment date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Page number
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Ordering field, `-` prefix for descending
    #[arg(long)]
    pub ordering: Option<String>,
}

impl ListArgs {
    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::new();
        if let Some(page) = self.page {
            query = query.page(page);
        }
        if let Some(size) = self.page_size {
            query = query.page_size(size);
        }
        if let Some(search) = &self.search {
            query = query.search(search.as_str());
        }
        if let Some(ordering) = &self.ordering {
            query = query.ordering(ordering.as_str());
        }
        query
    }
}
