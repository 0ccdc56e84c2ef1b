use clap::{Parser, Subcommand};
use sift::api::Criterion;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "sift", bin_name = "sift", version = get_version())]
#[command(about = "Filter products with composable specifications and keep a journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config, journal state and exports
    #[arg(long, global = true, env = "SIFT_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every product in the catalog
    #[command(alias = "ls")]
    Products {
        /// Read products from this JSON file instead of the configured catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Filter products by attribute criteria
    #[command(alias = "f")]
    Filter {
        /// Criterion the product must meet (repeatable)
        #[arg(short = 'w', long = "where", value_name = "ATTR=VALUE")]
        require: Vec<Criterion>,

        /// Criterion the product must not meet (repeatable)
        #[arg(short = 'x', long, value_name = "ATTR=VALUE")]
        exclude: Vec<Criterion>,

        /// Keep products meeting any --where criterion instead of all
        #[arg(long)]
        any: bool,

        /// Read products from this JSON file instead of the configured catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Add, remove, list or export journal entries
    #[command(alias = "j")]
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },

    /// Show or set configuration (keys: export-file, catalog)
    Config {
        /// Config key to show or set
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Add an entry
    #[command(alias = "a")]
    Add {
        /// Entry text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove an entry by key
    #[command(alias = "rm")]
    Remove {
        /// Key of the entry to remove
        key: u64,
    },

    /// List entries
    #[command(alias = "ls")]
    List,

    /// Write the journal as text (defaults to the configured export-file)
    Export {
        /// Destination file, relative to the current directory
        destination: Option<PathBuf>,
    },
}

impl Commands {
    /// The catalog override given on the command line, if any.
    pub fn catalog(&self) -> Option<&PathBuf> {
        match self {
            Commands::Products { catalog } | Commands::Filter { catalog, .. } => catalog.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_criteria() {
        let cli = Cli::try_parse_from([
            "sift", "filter", "--where", "color=green", "-w", "size=large", "-x", "name=Apple",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Filter {
                require,
                exclude,
                any,
                catalog,
            }) => {
                assert_eq!(
                    require,
                    vec![
                        Criterion::new("color", "green"),
                        Criterion::new("size", "large")
                    ]
                );
                assert_eq!(exclude, vec![Criterion::new("name", "Apple")]);
                assert!(!any);
                assert!(catalog.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_criterion() {
        assert!(Cli::try_parse_from(["sift", "filter", "--where", "green"]).is_err());
    }

    #[test]
    fn journal_add_joins_words() {
        let cli = Cli::try_parse_from(["sift", "journal", "add", "I", "read", "a", "book"]).unwrap();
        match cli.command {
            Some(Commands::Journal {
                action: JournalCommands::Add { text },
            }) => assert_eq!(text.join(" "), "I read a book"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sift", "products", "-v", "--data-dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn catalog_override_is_exposed() {
        let cli = Cli::try_parse_from(["sift", "f", "--catalog", "c.json"]).unwrap();
        assert_eq!(
            cli.command.unwrap().catalog(),
            Some(&PathBuf::from("c.json"))
        );
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
