use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dualbat_platform::SourceKind;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive battery view (default)
    #[command(alias = "tui")]
    Ui,

    /// Print the panel label once and exit
    Status {
        /// Print freedesktop icon names instead of Nerd Font glyphs
        #[arg(long)]
        icon_names: bool,

        /// Also print one line per battery
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the panel label on every poll and settings change
    Watch {
        /// Emit compact JSON snapshots instead of the label
        #[arg(long)]
        json: bool,

        /// Print freedesktop icon names instead of Nerd Font glyphs
        #[arg(long)]
        icon_names: bool,
    },

    /// Output snapshots in JSON format (suitable for piping)
    #[command(alias = "raw")]
    Pipe {
        /// Number of samples to output (0 = infinite)
        #[arg(short, long, default_value_t = 0)]
        samples: u32,

        /// Poll interval in seconds (defaults to the configured interval)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Compact JSON output (one line per sample)
        #[arg(short, long)]
        compact: bool,
    },

    /// Print raw readings, the selected source and config locations
    Debug,

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(short, long)]
        edit: bool,

        /// Persist whether battery names are shown
        #[arg(long, value_name = "BOOL")]
        show_name: Option<bool>,

        /// Persist whether the battery icon is shown
        #[arg(long, value_name = "BOOL")]
        show_icon: Option<bool>,
    },
}

/// Battery indicator for machines with more than one battery
#[derive(Debug, Parser)]
#[command(name = "dualbat", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Battery source (auto, upower, sysfs, starship)
    #[arg(long, global = true)]
    pub source: Option<SourceKind>,

    /// Read batteries from a JSON file instead of the system
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_ui() {
        let cli = Cli::parse_from(["dualbat"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["dualbat", "status", "--source", "sysfs", "--icon-names"]);
        assert_eq!(cli.source, Some(SourceKind::Sysfs));
        assert!(matches!(
            cli.command,
            Some(Commands::Status {
                icon_names: true,
                verbose: false
            })
        ));
    }

    #[test]
    fn test_config_flags_take_values() {
        let cli = Cli::parse_from(["dualbat", "config", "--show-name", "false"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                show_name: Some(false),
                show_icon: None,
                ..
            })
        ));
    }
}
