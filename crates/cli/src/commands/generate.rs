use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::Path;

use wrapgen_android::wrapper::{generate_from_sdk_template, generate_with_gradle};
use wrapgen_android::{AndroidSdk, filter_root_build_files, licenses::ensure_license_files};
use wrapgen_core::{RootBuildFile, StepConfig, WrapperPaths};
use wrapgen_utils::{done, list_paths_sorted_by_components, section, warn};

use crate::export::export_environment;

const GRADLEW_PATH_KEY: &str = "GRADLEW_PATH";

#[derive(Args, Debug)]
#[command(about = "Generate a Gradle wrapper if the project has none")]
pub struct GenerateArgs {
    /// Root directory of the Android project
    #[arg(long, env = "project_root_dir")]
    pub project_root_dir: Option<String>,

    /// Gradle version the wrapper should pin
    #[arg(long, env = "gradle_version")]
    pub gradle_version: Option<String>,

    /// Android SDK install, required when staging from the SDK template
    #[arg(long, env = "android_home")]
    pub android_home: Option<String>,

    /// Stage the wrapper files from the SDK's bundled template instead of
    /// running a local Gradle installation
    #[arg(long, default_value = "false")]
    pub from_sdk_template: bool,
}

/// Runs the whole provisioning pipeline: validate inputs, locate the root
/// build file, short-circuit on an existing wrapper, generate otherwise,
/// and export the wrapper path for later pipeline steps.
pub async fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let config = StepConfig {
        project_root_dir: args.project_root_dir.clone().unwrap_or_default(),
        gradle_version: args.gradle_version.clone().unwrap_or_default(),
        android_home: args.android_home.clone(),
    };

    println!();
    config.print();
    config.validate().context("issue with input")?;
    let sdk = if args.from_sdk_template {
        let android_home = config.validate_android_home().context("issue with input")?;
        Some(AndroidSdk::new(Path::new(android_home))?)
    } else {
        None
    };

    section("Search for root build file");
    let file_list = list_paths_sorted_by_components(Path::new(&config.project_root_dir))
        .with_context(|| {
            format!(
                "failed to search for files in ({})",
                config.project_root_dir
            )
        })?;
    let candidates = filter_root_build_files(&file_list);
    let Some(root_build_file) = RootBuildFile::select(candidates) else {
        bail!("no root build file found");
    };
    if root_build_file.is_ambiguous() {
        warn("multiple root build files found:");
        for candidate in root_build_file.candidates() {
            warn(&format!("- {}", candidate.display()));
        }
    }
    done(&format!(
        "root build file path: {}",
        root_build_file.chosen().display()
    ));

    let paths = WrapperPaths::for_root_build_file(root_build_file.chosen());
    let gradlew = paths.gradlew();
    if gradlew.exists() {
        done(&format!("gradle wrapper exist at: {}", gradlew.display()));
        return Ok(());
    }

    if let Some(sdk) = &sdk {
        section("Ensure Android SDK licenses");
        ensure_license_files(sdk).await?;

        section("Generate Gradle wrapper");
        generate_from_sdk_template(&paths, sdk, &config.gradle_version).await?;
    } else {
        section("Generate Gradle wrapper");
        generate_with_gradle(&paths, &config.gradle_version).await?;
    }

    let gradlew = gradlew
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", gradlew.display()))?;
    export_environment(GRADLEW_PATH_KEY, &gradlew.to_string_lossy())
        .await
        .context("failed to export gradlew path into GRADLEW_PATH environment")?;

    done(&format!("gradle wrapper generated: {}", gradlew.display()));
    Ok(())
}
