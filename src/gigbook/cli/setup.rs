use clap::{CommandFactory, Parser, Subcommand};
use gigbook::api::TableSort;
use gigbook::directory::SortKey;
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
#[command(
    name = "gigbook",
    bin_name = "gigbook",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Find, book and onboard performing artists for events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding submissions, favorites and config.json
    #[arg(long, global = true, env = "GIGBOOK_HOME", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Make every directory fetch fail with this message
    #[arg(long, global = true, hide = true, env = "GIGBOOK_SIMULATE_FETCH_ERROR")]
    pub simulate_fetch_error: Option<String>,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Directory,
    Artists,
    Review,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Directory => "Directory:",
            CommandGroup::Artists => "Artists:",
            CommandGroup::Review => "Review:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "browse" | "categories" | "locations" | "fee-ranges" => Some(CommandGroup::Directory),
            "show" | "onboard" | "favorite" | "favorites" => Some(CommandGroup::Artists),
            "dashboard" | "approve" | "remove" => Some(CommandGroup::Review),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Directory,
            CommandGroup::Artists,
            CommandGroup::Review,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("gigbook {version}\n"));
    output.push_str("Find, book and onboard performing artists for events\n");
    output.push('\n');
    output.push_str("Usage: gigbook [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Data directory [env: GIGBOOK_HOME]\n");
    output.push_str("  -v, --verbose         Debug logging on stderr\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse { .. } => "browse",
            Commands::Categories => "categories",
            Commands::Locations => "locations",
            Commands::FeeRanges => "fee-ranges",
            Commands::Show { .. } => "show",
            Commands::Onboard { .. } => "onboard",
            Commands::Favorite { .. } => "favorite",
            Commands::Favorites => "favorites",
            Commands::Dashboard { .. } => "dashboard",
            Commands::Approve { .. } => "approve",
            Commands::Remove { .. } => "remove",
            Commands::Config { .. } => "config",
            Commands::Help { .. } => "help",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the artist directory
    #[command(alias = "ls", display_order = 1)]
    Browse {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Only these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Location contains any of these (repeatable)
        #[arg(short, long)]
        location: Vec<String>,

        /// Exact fee range label (repeatable, see `gigbook fee-ranges`)
        #[arg(short, long)]
        price: Vec<String>,

        /// default, name-asc, name-desc, price-asc, price-desc or rating-desc
        #[arg(long, default_value = "default")]
        sort: SortKey,

        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Search names and bios only
        #[arg(long)]
        minimal_search: bool,
    },

    /// List artist categories
    #[command(display_order = 2)]
    Categories,

    /// List known locations
    #[command(display_order = 3)]
    Locations,

    /// List the accepted fee ranges
    #[command(display_order = 4)]
    FeeRanges,

    /// Show one artist
    #[command(alias = "v", display_order = 10)]
    Show { id: String },

    /// Submit a new artist profile
    #[command(display_order = 11)]
    Onboard {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        bio: String,

        /// Repeatable
        #[arg(long)]
        category: Vec<String>,

        /// Repeatable
        #[arg(long)]
        language: Vec<String>,

        /// One of the labels from `gigbook fee-ranges`
        #[arg(long, default_value = "")]
        fee: String,

        #[arg(long, default_value = "")]
        location: String,

        /// Path or URL of a profile image
        #[arg(long)]
        image: Option<String>,
    },

    /// Add or remove an artist from favorites
    #[command(display_order = 12)]
    Favorite { id: String },

    /// List favorite artists
    #[command(display_order = 13)]
    Favorites,

    /// Review submitted artists
    #[command(display_order = 20)]
    Dashboard {
        /// Match name or location
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        /// name, location or fee
        #[arg(long, default_value = "name")]
        sort: TableSort,

        /// Reverse the sort order
        #[arg(long)]
        desc: bool,
    },

    /// Approve a submitted artist
    #[command(display_order = 21)]
    Approve { id: String },

    /// Remove a submitted artist
    #[command(alias = "rm", display_order = 22)]
    Remove { id: String },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (page_size, fetch_delay_ms, submit_delay_ms or search_mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for gigbook or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_browse_filters() {
        let cli = Cli::try_parse_from([
            "gigbook",
            "browse",
            "-c",
            "Dancer",
            "-c",
            "DJ",
            "--sort",
            "price-desc",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Browse {
                category,
                sort,
                page,
                ..
            }) => {
                assert_eq!(category, vec!["Dancer", "DJ"]);
                assert_eq!(sort, SortKey::PriceDesc);
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["gigbook", "browse", "--sort", "loudest"]).is_err());
    }

    #[test]
    fn dashboard_defaults() {
        let cli = Cli::try_parse_from(["gigbook", "dashboard"]).unwrap();
        match cli.command {
            Some(Commands::Dashboard {
                category, sort, desc, ..
            }) => {
                assert_eq!(category, "all");
                assert_eq!(sort, TableSort::Name);
                assert!(!desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn data_dir_is_global() {
        let cli = Cli::try_parse_from(["gigbook", "favorites", "--data-dir", "/tmp/gb"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/gb")));
    }

    #[test]
    fn every_command_has_a_group() {
        let cmd = Cli::command();
        for sc in cmd.get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
        assert!(get_grouped_help().contains("Review:"));
    }
}
