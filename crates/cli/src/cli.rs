use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(name = "vsx-validate", about = "Validate extension metadata before publishing")]
pub struct Cli {
    /// JSON file overriding the default field limits
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print issues as a JSON array
    #[clap(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Validate the metadata of an extension version (JSON file)
    Metadata { file: PathBuf },
    /// Validate the profile of a namespace (JSON file)
    Profile { file: PathBuf },
    /// Validate a namespace name
    Namespace { name: String },
    /// Validate an extension name
    Name { name: String },
    /// Validate a version string
    Version { version: String },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_metadata_command() {
        let cli =
            Cli::try_parse_from(["vsx-validate", "--json", "metadata", "package.json"]).unwrap();
        assert!(cli.json);
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Metadata { file } if file == PathBuf::from("package.json")
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = ["vsx-validate", "version", "1.0.0", "-v", "--config", "limits.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("limits.json")));
        assert!(matches!(cli.command, Commands::Version { version } if version == "1.0.0"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["vsx-validate"]).is_err());
    }
}
