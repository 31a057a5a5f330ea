use anyhow::{Context, Result, bail};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use wrapgen_utils::{run_in_dir, warn};

/// Download URL of the "-bin" distribution zip for a Gradle version.
#[must_use]
pub fn distribution_url(version: &str) -> String {
    format!("https://services.gradle.org/distributions/gradle-{version}-bin.zip")
}

/// Streams `url` into a fresh temporary directory and returns the
/// downloaded archive path. The directory is kept on disk for the caller.
/// The request carries no timeout; an unresponsive server blocks the step.
///
/// # Errors
/// Returns error if the temporary directory cannot be created, the
/// request fails, or the body cannot be written to disk.
pub async fn download_into_tmp_dir(url: &str) -> Result<PathBuf> {
    let name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .with_context(|| format!("failed to derive archive name from ({url})"))?;

    let tmp_dir = tempfile::Builder::new()
        .prefix("_generate_gradle_wrapper_")
        .tempdir()
        .context("failed to create tmp destination dir")?
        .keep();
    let tmp_path = tmp_dir.join(name);

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("failed to download from ({url})"))?;
    if !response.status().is_success() {
        bail!(
            "failed to download from ({url}), status: {}",
            response.status()
        );
    }

    let mut tmp_file = tokio::fs::File::create(&tmp_path)
        .await
        .with_context(|| format!("failed to create ({})", tmp_path.display()))?;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.with_context(|| format!("failed to download from ({url})"))?;
        tmp_file
            .write_all(&chunk)
            .await
            .with_context(|| format!("failed to write ({})", tmp_path.display()))?;
    }
    if let Err(err) = tmp_file.shutdown().await {
        warn(&format!("failed to close ({}): {err}", tmp_path.display()));
    }

    Ok(tmp_path)
}

/// Unpacks a downloaded distribution archive next to itself with
/// /usr/bin/unzip and returns the unpacked directory, derived by the
/// "-bin" suffix convention of Gradle archive names.
///
/// # Errors
/// Returns error if the archive path has no parent or file name, or if
/// unzip exits non-zero.
pub async fn unpack_distribution(archive: &Path) -> Result<PathBuf> {
    let parent_dir = archive
        .parent()
        .with_context(|| format!("no parent dir for ({})", archive.display()))?;
    let archive_name = archive
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("no file name for ({})", archive.display()))?;

    run_in_dir("/usr/bin/unzip", &[archive_name], parent_dir)
        .await
        .with_context(|| format!("failed to unzip: {}", archive.display()))?;

    Ok(parent_dir.join(unpacked_dir_name(archive_name)))
}

fn unpacked_dir_name(archive_name: &str) -> &str {
    archive_name
        .strip_suffix("-bin.zip")
        .unwrap_or(archive_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_distribution_url() {
        assert_eq!(
            distribution_url("7.2"),
            "https://services.gradle.org/distributions/gradle-7.2-bin.zip"
        );
    }

    #[rstest]
    #[case("gradle-7.2-bin.zip", "gradle-7.2")]
    #[case("gradle-4.10.2-bin.zip", "gradle-4.10.2")]
    #[case("gradle-7.2-all.zip", "gradle-7.2-all.zip")]
    #[case("archive.zip", "archive.zip")]
    fn test_unpacked_dir_name(#[case] archive_name: &str, #[case] expected: &str) {
        assert_eq!(unpacked_dir_name(archive_name), expected);
    }

    #[tokio::test]
    async fn test_unpack_rejects_path_without_parent() {
        let err = unpack_distribution(Path::new("/")).await.unwrap_err();
        assert!(err.to_string().contains("no parent dir"));
    }

    #[tokio::test]
    async fn test_unpack_rejects_path_without_file_name() {
        let err = unpack_distribution(Path::new("/tmp/..")).await.unwrap_err();
        assert!(err.to_string().contains("no file name"));
    }
}
