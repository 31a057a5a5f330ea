use crate::properties::rewrite_distribution_url;
use crate::sdk::AndroidSdk;
use anyhow::{Context, Result, bail};
use std::path::Path;
use wrapgen_core::WrapperPaths;
use wrapgen_utils::run_in_dir;

/// Generates the wrapper by running a locally installed Gradle inside the
/// project root. A non-zero exit surfaces the captured output; a zero exit
/// without a `gradlew` on disk is reported as its own error, since it
/// points at environment drift rather than a plain command failure.
///
/// # Errors
/// Returns error if the command fails, the wrapper script is absent
/// afterwards, or the generated properties file cannot be rewritten.
pub async fn generate_with_gradle(paths: &WrapperPaths, gradle_version: &str) -> Result<()> {
    run_in_dir(
        "gradle",
        &["wrapper", "--gradle-version", gradle_version],
        paths.root_dir(),
    )
    .await
    .context("gradle wrapper command failed")?;

    let gradlew = paths.gradlew();
    if !gradlew.exists() {
        bail!(
            "gradle wrapper reported success but {} was not created",
            gradlew.display()
        );
    }

    // The command pins whatever distribution flavor Gradle defaults to;
    // the requested "-all" distribution must win.
    let properties_path = paths.wrapper_properties();
    if properties_path.exists() {
        rewrite_properties(&properties_path, gradle_version).await?;
    }

    Ok(())
}

/// Stages the wrapper from the Android SDK's bundled template, for hosts
/// that carry an SDK install but no standalone Gradle. Fresh generation
/// only: the `gradle` directory next to the root build file must not
/// exist yet.
///
/// # Errors
/// Returns error if the template is missing from the SDK or any copy or
/// rewrite step fails.
pub async fn generate_from_sdk_template(
    paths: &WrapperPaths,
    sdk: &AndroidSdk,
    gradle_version: &str,
) -> Result<()> {
    let template_dir = sdk.wrapper_template_dir();
    if !template_dir.is_dir() {
        bail!(
            "gradle wrapper template not exists at: {}",
            template_dir.display()
        );
    }

    let template_gradlew = template_dir.join("gradlew");
    let gradlew = paths.gradlew();
    tokio::fs::copy(&template_gradlew, &gradlew)
        .await
        .with_context(|| {
            format!(
                "failed to copy gradlew from: {} to: {}",
                template_gradlew.display(),
                gradlew.display()
            )
        })?;

    let template_gradlew_bat = template_dir.join("gradlew.bat");
    if template_gradlew_bat.exists() {
        tokio::fs::copy(&template_gradlew_bat, paths.gradlew_bat())
            .await
            .with_context(|| {
                format!(
                    "failed to copy gradlew.bat from: {}",
                    template_gradlew_bat.display()
                )
            })?;
    }

    let gradle_dir = paths.gradle_dir();
    tokio::fs::create_dir(&gradle_dir)
        .await
        .with_context(|| format!("failed to create: {}", gradle_dir.display()))?;

    let template_wrapper_dir = template_dir.join("gradle").join("wrapper");
    copy_dir_recursive(&template_wrapper_dir, &paths.wrapper_dir())
        .await
        .with_context(|| {
            format!(
                "failed to copy: {} to {}",
                template_wrapper_dir.display(),
                gradle_dir.display()
            )
        })?;

    rewrite_properties(&paths.wrapper_properties(), gradle_version).await
}

async fn rewrite_properties(properties_path: &Path, gradle_version: &str) -> Result<()> {
    let content = tokio::fs::read_to_string(properties_path)
        .await
        .with_context(|| format!("failed to read {}", properties_path.display()))?;
    tokio::fs::write(
        properties_path,
        rewrite_distribution_url(&content, gradle_version),
    )
    .await
    .with_context(|| format!("failed to update {}", properties_path.display()))
}

/// The template tree is only two levels deep but recursion keeps the copy
/// honest about future layout changes.
async fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create: {}", dst.display()))?;
    let mut entries = tokio::fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read dir: {}", src.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if entry.file_type().await?.is_dir() {
            Box::pin(copy_dir_recursive(&src_path, &dst_path)).await?;
        } else {
            tokio::fs::copy(&src_path, &dst_path)
                .await
                .with_context(|| format!("failed to copy: {}", src_path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE_PROPERTIES: &str = "distributionBase=GRADLE_USER_HOME\n\
        distributionUrl=https\\://services.gradle.org/distributions/gradle-4.10.2-bin.zip\n";

    fn fake_sdk(root: &Path) -> AndroidSdk {
        let template_dir = root.join("tools/templates/gradle/wrapper");
        fs::create_dir_all(template_dir.join("gradle/wrapper")).unwrap();
        fs::write(template_dir.join("gradlew"), "#!/bin/sh\nexec gradle \"$@\"\n").unwrap();
        fs::write(template_dir.join("gradlew.bat"), "@rem template\r\n").unwrap();
        fs::write(template_dir.join("gradle/wrapper/gradle-wrapper.jar"), b"jar").unwrap();
        fs::write(
            template_dir.join("gradle/wrapper/gradle-wrapper.properties"),
            TEMPLATE_PROPERTIES,
        )
        .unwrap();
        AndroidSdk::new(root).unwrap()
    }

    fn fake_project(root: &Path) -> WrapperPaths {
        fs::write(root.join("build.gradle"), "// root project\n").unwrap();
        WrapperPaths::for_root_build_file(&root.join("build.gradle"))
    }

    #[tokio::test]
    async fn test_template_staging_produces_full_wrapper() {
        let sdk_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        let sdk = fake_sdk(sdk_dir.path());
        let paths = fake_project(project_dir.path());

        generate_from_sdk_template(&paths, &sdk, "7.2").await.unwrap();

        assert!(paths.gradlew().exists());
        assert!(paths.gradlew_bat().exists());
        assert!(paths.wrapper_jar().exists());
        let properties = fs::read_to_string(paths.wrapper_properties()).unwrap();
        assert!(properties.contains(
            "distributionUrl=https\\://services.gradle.org/distributions/gradle-7.2-all.zip"
        ));
        assert!(properties.starts_with("distributionBase=GRADLE_USER_HOME\n"));
        sdk_dir.close().unwrap();
        project_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_template_staging_fails_without_template() {
        let sdk_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        let sdk = AndroidSdk::new(sdk_dir.path()).unwrap();
        let paths = fake_project(project_dir.path());

        let err = generate_from_sdk_template(&paths, &sdk, "7.2")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("template not exists"));
        assert!(!paths.gradlew().exists());
        sdk_dir.close().unwrap();
        project_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_template_staging_is_not_an_idempotent_merge() {
        let sdk_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        let sdk = fake_sdk(sdk_dir.path());
        let paths = fake_project(project_dir.path());
        // a pre-existing gradle dir marks a half-generated tree
        fs::create_dir(paths.gradle_dir()).unwrap();

        let err = generate_from_sdk_template(&paths, &sdk, "7.2")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to create"));
        sdk_dir.close().unwrap();
        project_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_generate_with_gradle_missing_command() {
        let project_dir = TempDir::new().unwrap();
        let paths = fake_project(project_dir.path());

        // only asserts the error path when no gradle is installed; hosts
        // with a real gradle would generate a wrapper here, so skip then
        if which_gradle_exists() {
            return;
        }
        let err = generate_with_gradle(&paths, "7.2").await.unwrap_err();
        assert!(err.to_string().contains("gradle wrapper command failed"));
        assert!(!paths.gradlew().exists());
        project_dir.close().unwrap();
    }

    fn which_gradle_exists() -> bool {
        std::env::var_os("PATH").is_some_and(|path| {
            std::env::split_paths(&path).any(|dir| dir.join("gradle").is_file())
        })
    }
}
