//! CLI module for Wingman
//!
//! Provides command-line interface parsing and handling for the `wingman` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;

use crate::analysis::AnalysisKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wingman AI - sales intelligence from your terminal
#[derive(Parser, Debug)]
#[command(
    name = "wingman",
    version,
    about = "Wingman AI - sales intelligence from your terminal",
    long_about = "Sign in to the Wingman backend, run market analyses for a prospect\n\
                  and chat with an assistant that has read the results.",
    after_help = "EXAMPLES:\n    \
                  wingman login --email ada@acme.io\n    \
                  wingman analyze --prospect-url https://roadrunner.com --prospect-job-title CTO -a persona -a 'latest news'\n    \
                  wingman analyze ... --chat      # open a chat on the results\n    \
                  wingman status\n    \
                  wingman logout"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "wingman.toml", global = true)]
    pub config: PathBuf,

    /// Backend base URL (overrides the config file)
    #[arg(long, env = "WINGMAN_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding the saved session (overrides the config file)
    #[arg(long, env = "WINGMAN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        /// Prompted for when omitted
        #[arg(long, env = "WINGMAN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        company_url: String,

        #[arg(long)]
        company_description: String,

        #[arg(long)]
        email: String,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,

        /// Prompted for when omitted
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Ask the backend to email password reset instructions
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the saved session
    Status,

    /// List the available analyses
    Analyses,

    /// Run analyses for a prospect (requires a session)
    Analyze(AnalyzeArgs),
}

/// Analysis form fields
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Defaults to the company website saved with the session
    #[arg(long)]
    pub company_website: Option<String>,

    /// Defaults to the company description saved with the session
    #[arg(long)]
    pub company_description: Option<String>,

    #[arg(long, default_value = "")]
    pub competitor_website: String,

    #[arg(long)]
    pub prospect_url: String,

    #[arg(long)]
    pub prospect_job_title: String,

    /// Analysis to run; repeat for several (see `wingman analyses`)
    #[arg(short = 'a', long = "analysis", value_parser = parse_analysis)]
    pub analyses: Vec<AnalysisKind>,

    /// Open a chat seeded with the results
    #[arg(long)]
    pub chat: bool,
}

fn parse_analysis(s: &str) -> Result<AnalysisKind, String> {
    s.parse().map_err(|e: crate::analysis::UnknownAnalysis| e.to_string())
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
