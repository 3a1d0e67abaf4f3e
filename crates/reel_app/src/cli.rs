use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use reel_core::CategoryFilter;

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "reel",
    version,
    about = "Simulated gameplay highlight queue, uploader and library"
)]
pub struct Cli {
    /// RON settings file; built-in defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogDestination::Terminal, global = true)]
    pub log: LogDestination,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Watch the processing queue advance until every job is ready.
    Queue {
        /// Stop after this many ticks even if jobs are still running.
        #[arg(long)]
        ticks: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Simulate uploading gameplay videos.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Search and filter the highlight library.
    Library {
        #[arg(short, long, default_value = "")]
        query: String,
        /// all, kill, teamfight or epic.
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
        #[arg(long)]
        json: bool,
    },
    /// Catalog totals and the most viewed highlights.
    Analytics {
        #[arg(long, default_value_t = 5)]
        top: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective settings.
    Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::Category;

    #[test]
    fn library_category_is_parsed_strictly() {
        let cli = Cli::try_parse_from(["reel", "library", "-c", "teamfight", "-q", "penta"]).unwrap();
        match cli.command {
            Command::Library {
                query, category, ..
            } => {
                assert_eq!(query, "penta");
                assert_eq!(category, CategoryFilter::Only(Category::TeamFight));
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["reel", "library", "-c", "assist"]).is_err());
    }

    #[test]
    fn upload_requires_files() {
        assert!(Cli::try_parse_from(["reel", "upload"]).is_err());
        let cli = Cli::try_parse_from(["reel", "-vv", "upload", "a.mp4", "b.mov"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Upload { ref files, .. } if files.len() == 2));
    }
}
