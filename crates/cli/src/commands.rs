use std::path::Path;

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use vsx_types::{ExtensionMetadata, NamespaceDetails};
use vsx_validator::{ExtensionValidator, Issue, ValidationConfig};

use crate::cli::Commands;

pub fn create_validator(config: Option<&Path>) -> Result<ExtensionValidator> {
    match config {
        Some(path) => {
            let config = ValidationConfig::load(path)?;
            tracing::debug!("Loaded validation limits from {}", path.display());
            Ok(ExtensionValidator::with_config(config)?)
        }
        None => Ok(ExtensionValidator::new()),
    }
}

pub fn run(validator: &ExtensionValidator, command: Commands) -> Result<Vec<Issue>> {
    let issues = match command {
        Commands::Metadata { file } => {
            let metadata: ExtensionMetadata = read_json(&file)?;
            validator.validate_metadata(&metadata)
        }
        Commands::Profile { file } => {
            let details: NamespaceDetails = read_json(&file)?;
            validator.validate_namespace_details(&details)
        }
        Commands::Namespace { name } => validator
            .validate_namespace(Some(name.as_str()))
            .into_iter()
            .collect(),
        Commands::Name { name } => validator
            .validate_extension_name(Some(name.as_str()))
            .into_iter()
            .collect(),
        Commands::Version { version } => validator
            .validate_extension_version(Some(version.as_str()))
            .into_iter()
            .collect(),
    };

    if !issues.is_empty() {
        tracing::info!("Found {} issue(s)", issues.len());
    }
    Ok(issues)
}

pub fn print_issues(issues: &[Issue], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(issues)?);
        return Ok(());
    }
    for issue in issues {
        println!("{}", issue);
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}
