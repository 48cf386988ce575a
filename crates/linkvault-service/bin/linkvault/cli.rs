use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "LINKVAULT_DB_PATH";
pub const BUCKET_ENV: &str = "LINKVAULT_BUCKET";
pub const LOCK_TIMEOUT_ENV: &str = "LINKVAULT_LOCK_TIMEOUT_MS";
pub const LOG_FORMAT_ENV: &str = "LINKVAULT_LOG_FORMAT";

pub const DEFAULT_DB_PATH: &str = "links.db";
pub const DEFAULT_BUCKET: &str = "links";
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linkvault", about = "Manage short links stored in a local database")]
pub struct CLI {
    #[arg(long, env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, env = BUCKET_ENV, default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Milliseconds a write waits for the writer slot.
    #[arg(long, env = LOCK_TIMEOUT_ENV, default_value_t = DEFAULT_LOCK_TIMEOUT_MS)]
    pub lock_timeout_ms: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shorten a URL and print its identifier.
    Create {
        url: String,
        /// Generate a 16 character identifier instead of 8.
        #[arg(long)]
        secure: bool,
        #[arg(long)]
        custom_id: Option<String>,
    },
    /// Print the destination of a link and count a click.
    Resolve { id: String },
    /// Print the stored record of a link as JSON.
    Show { id: String },
    /// Print every stored link.
    List {
        #[arg(long)]
        json: bool,
    },
    Remove { id: String },
}
