use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the `larder` binary.
///
/// There are no subcommands: the program is an interactive menu loop
/// over the inventory. Flags only steer where state lives and how
/// output looks.
#[derive(Debug, Parser)]
#[command(
    name = "larder",
    version,
    about = "Track perishable stock: prices, quantities, expiry dates"
)]
pub struct Cli {
    /// Snapshot file holding the inventory (overrides the config file)
    #[arg(long, env = "LARDER_DATA_FILE", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Config file location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "larder",
            "--data-file",
            "/tmp/inventory.json",
            "--no-color",
        ]);
        assert_eq!(
            cli.data_file.as_deref(),
            Some(std::path::Path::new("/tmp/inventory.json"))
        );
        assert!(cli.config.is_none());
        assert!(cli.no_color);
    }
}
