use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use relay_types::Priority;

#[derive(Parser)]
#[command(
    name = "relay",
    about = "Relay — escalation chain and document proxy walkthroughs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with `[chain]` and `[store]` settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run both walkthroughs
    Demo,
    /// Route one support request through the default chain
    Escalate(EscalateArgs),
    /// Upload, download, edit, and search a document through the proxy
    Documents(DocumentsArgs),
}

#[derive(Args)]
pub struct EscalateArgs {
    #[arg(long)]
    pub id: i64,
    /// low, medium, or high
    #[arg(short, long)]
    pub priority: Priority,
    #[arg(short, long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct DocumentsArgs {
    #[arg(short, long, default_value = "Document")]
    pub query: String,
}
