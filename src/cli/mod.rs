use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "veritor",
    about = "A verification oracle that judges rendered pages against task constraints",
    version,
    author,
    long_about = None
)]
pub struct VeritorCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Emit the verdict as JSON instead of colored text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify a static HTML snapshot of a listing page
    Snapshot {
        /// Path to the HTML snapshot file
        #[arg(short, long)]
        file: PathBuf,

        /// Strict upper bound on the listed price
        #[arg(long)]
        max_price: f64,

        /// Expected city (matched case-insensitively)
        #[arg(long)]
        city: String,

        /// Expected bedroom count (matched exactly)
        #[arg(long)]
        bedrooms: i64,
    },

    /// Verify a redirected URL's query string
    Url {
        /// The final URL after redirects
        final_url: String,

        /// Repository the query must reference (repo:<value>)
        #[arg(long)]
        repo: String,

        /// Required value of the type query parameter
        #[arg(long = "type")]
        search_type: String,

        /// Label the query must reference (label:<value>)
        #[arg(long)]
        label: String,
    },
}
