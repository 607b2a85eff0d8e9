use clap::Parser;

/// Long version string: semver plus the build metadata embedded by build.rs.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

/// One command, no subcommands: running the binary prints the manual steps
/// for applying the agent dashboard migration. It executes nothing.
#[derive(Parser)]
#[command(
    name = "agent-migrate",
    version,
    long_version = LONG_VERSION,
    about = "Prints how to apply the agent dashboard migration to a Supabase project"
)]
pub struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["agent-migrate"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_counts_verbose_flags() {
        let cli = Cli::try_parse_from(["agent-migrate", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["agent-migrate", "apply"]).is_err());
    }

    #[test]
    fn test_long_version_carries_build_metadata() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains("built"));
    }
}
