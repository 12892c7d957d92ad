//! CLI argument parsing using clap

use clap::Parser;

/// Fetch the grading criteria of a course
#[derive(Parser, Debug)]
#[command(name = "gc", about = "Fetch grading criteria for a course", version)]
pub struct Args {
    /// Course identifier (numeric or textual)
    #[arg(short, long, default_value = "")]
    pub course_id: String,

    /// Base URL of the grading API
    #[arg(long, env = "GC_BASE_URL")]
    pub base_url: String,

    /// Bearer token for the API
    #[arg(long, env = "GC_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Quiet mode - only output the JSON response
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
