use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linkcost")]
#[command(
    version,
    about = "Overage estimator for 95th-percentile links with permitted burst hours"
)]
pub struct Cli {
    /// Use a config file other than ~/.linkcost/config.toml
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    /// Override one field for this run (e.g. peak_hours=50); repeatable
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Read a JSON document with `contract` and/or `usage` from stdin
    #[arg(long = "stdin")]
    pub stdin: bool,

    /// Output the breakdown as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Append an explanation of the charging model
    #[arg(short = 'e', long = "explain")]
    pub explain: bool,

    /// Edit fields interactively, recomputing after each edit
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_set() {
        let cli = Cli::parse_from([
            "linkcost",
            "--set",
            "peak_hours=50",
            "-s",
            "overage_rate_per_mb=2",
            "--json",
        ]);
        assert_eq!(cli.set, vec!["peak_hours=50", "overage_rate_per_mb=2"]);
        assert!(cli.json);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::parse_from(["linkcost", "--config", "/tmp/x.toml", "--check"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert!(cli.check);
    }
}
