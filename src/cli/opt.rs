// src/cli/opt.rs

use std::path::PathBuf;

use careernexus::models::{execution::Language, user::Role};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "careernexus", about = "Terminal client for the CareerNexus placement portal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session
    Login(Login),
    Logout,
    /// Show the stored session
    Whoami,
    /// List open job postings
    Jobs,
    /// Apply to a posting
    Apply { job_id: String },
    /// List your applications
    Applications,
    /// List your coding assessments
    Exams,
    /// Take a coding assessment interactively
    Exam { id: String },
    /// Open a practice editor session
    Practice { session_id: String },
    /// Run a source file once on the execution service
    Run(RunArgs),
    /// Create an account (admin)
    CreateUser(CreateUser),
}

#[derive(Debug, Parser)]
pub(crate) struct Login {
    #[arg(short, long)]
    pub(crate) email: String,
    /// Read from stdin when omitted
    #[arg(short, long)]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct RunArgs {
    pub(crate) file: PathBuf,
    /// Defaults to the file extension
    #[arg(short, long)]
    pub(crate) language: Option<Language>,
    /// File whose content is passed as stdin
    #[arg(short, long)]
    pub(crate) stdin: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct CreateUser {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
    #[arg(long)]
    pub(crate) role: Role,
}
