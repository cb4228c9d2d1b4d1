// src/cli/mod.rs - CLI definition (clap derive)

pub mod list;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatdeck", about = "Browse chat sessions from a remote endpoint", version)]
pub struct Cli {
    /// Session collection endpoint (overrides config)
    #[arg(long, env = "CHATDECK_URL", global = true)]
    pub url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print sessions, newest activity first within each page
    List {
        /// Page to print
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Follow pagination until the last page
        #[arg(long, conflicts_with = "page")]
        all: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the messages of one session
    Show {
        /// Session id
        id: i64,
        /// Stop looking after this many pages
        #[arg(long, default_value = "50")]
        max_pages: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_viewer() {
        let cli = Cli::try_parse_from(["chatdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["chatdeck", "list"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                page: 1,
                all: false,
                json: false
            })
        );
    }

    #[test]
    fn test_list_all_conflicts_with_page() {
        assert!(Cli::try_parse_from(["chatdeck", "list", "--all", "--page", "2"]).is_err());
    }

    #[test]
    fn test_show_with_url() {
        let args = ["chatdeck", "show", "42", "--url", "http://localhost:1/s"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://localhost:1/s"));
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                id: 42,
                max_pages: 50,
                json: false
            })
        );
    }
}
