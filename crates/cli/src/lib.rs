use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    FetchDistributionArgs, GenerateArgs, handle_fetch_distribution, handle_generate,
};

pub mod commands;
mod export;

#[derive(Parser, Debug)]
#[command(
    name = "wrapgen",
    author,
    version,
    about = "Ensures an Android project carries a Gradle wrapper, generating one if absent",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Generate(GenerateArgs),
    FetchDistribution(FetchDistributionArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Generate(args) => handle_generate(&args).await?,
            Commands::FetchDistribution(args) => handle_fetch_distribution(&args).await?,
        }
    } else {
        handle_generate(&cli.generate).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate() {
        use clap::Parser;
        let cli = Cli::parse_from(["wrapgen", "generate", "--gradle-version", "7.2"]);
        assert!(matches!(cli.command, Some(Commands::Generate(_))));
    }

    #[test]
    fn test_cli_parsing_fetch_distribution() {
        use clap::Parser;
        let cli = Cli::parse_from(["wrapgen", "fetch-distribution", "--gradle-version", "7.2"]);
        assert!(matches!(cli.command, Some(Commands::FetchDistribution(_))));
    }

    #[test]
    fn test_cli_parsing_default_is_generate() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "wrapgen",
            "--project-root-dir",
            "/work/project",
            "--gradle-version",
            "7.2",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(
            cli.generate.project_root_dir.as_deref(),
            Some("/work/project")
        );
        assert_eq!(cli.generate.gradle_version.as_deref(), Some("7.2"));
        assert!(!cli.generate.from_sdk_template);
    }

    #[test]
    fn test_cli_parsing_from_sdk_template() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "wrapgen",
            "--gradle-version",
            "7.2",
            "--android-home",
            "/opt/android-sdk",
            "--from-sdk-template",
        ]);
        assert!(cli.generate.from_sdk_template);
        assert_eq!(
            cli.generate.android_home.as_deref(),
            Some("/opt/android-sdk")
        );
    }
}
