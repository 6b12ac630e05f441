// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;

/// Prints the public IP address of this machine once enough independent
/// "what is my IP" services agree on it.
#[derive(Debug, Parser)]
#[command(name = "whereami", version)]
pub struct Cli {
    /// Print the detailed lookup log after the address
    #[arg(long)]
    pub verbose: bool,

    /// Number of providers that must agree, overriding the configuration
    #[arg(short, long)]
    pub quorum: Option<usize>,

    /// Path of the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_describes_the_tool() {
        let about = Cli::command().get_about().map(|about| about.to_string());

        assert!(about.is_some_and(|about| about.contains("public IP address")));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["whereami", "--verbose", "-q", "2", "--config", "/tmp/w.toml"]);

        assert!(cli.verbose);
        assert_eq!(cli.quorum, Some(2));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
    }

    #[test]
    fn defaults_to_quiet_output() {
        let cli = Cli::parse_from(["whereami"]);

        assert!(!cli.verbose);
        assert_eq!(cli.quorum, None);
        assert_eq!(cli.config, None);
    }
}
