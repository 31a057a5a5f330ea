use anyhow::{Result, bail};
use colored::Colorize;
use std::path::Path;

/// Step inputs, read from the calling pipeline's environment.
///
/// `android_home` is only consulted when the wrapper is staged from the
/// Android SDK's bundled template instead of a local Gradle installation,
/// so it stays optional here and is validated separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    pub project_root_dir: String,
    pub gradle_version: String,
    pub android_home: Option<String>,
}

impl StepConfig {
    /// Echoes the received inputs, matching the step's log layout.
    pub fn print(&self) {
        println!("{}", "Configs:".bright_blue().bold());
        println!("- ProjectRootDir: {}", self.project_root_dir);
        println!("- GradleVersion: {}", self.gradle_version);
        println!(
            "- AndroidHome: {}",
            self.android_home.as_deref().unwrap_or("")
        );
    }

    /// # Errors
    /// Returns error if the project root is missing or not a directory, or
    /// if the requested Gradle version is empty.
    pub fn validate(&self) -> Result<()> {
        if self.project_root_dir.is_empty() {
            bail!("no ProjectRootDir parameter specified");
        }
        if !Path::new(&self.project_root_dir).is_dir() {
            bail!("ProjectRootDir ({}) not exists", self.project_root_dir);
        }
        if self.gradle_version.is_empty() {
            bail!("no GradleVersion parameter specified");
        }
        Ok(())
    }

    /// # Errors
    /// Returns error if `android_home` was not provided. Only the SDK
    /// template path needs it, so this is not part of [`Self::validate`].
    pub fn validate_android_home(&self) -> Result<&str> {
        match self.android_home.as_deref() {
            None | Some("") => bail!("no AndroidHome parameter specified"),
            Some(home) => Ok(home),
        }
    }
}
