use anyhow::{Result, bail};
use clap::Args;

use wrapgen_android::distribution::{
    distribution_url, download_into_tmp_dir, unpack_distribution,
};
use wrapgen_utils::{detail, done, section};

#[derive(Args, Debug)]
#[command(about = "Download and unpack a Gradle distribution into a temp directory")]
pub struct FetchDistributionArgs {
    /// Gradle version to fetch
    #[arg(long, env = "gradle_version")]
    pub gradle_version: Option<String>,
}

/// Fetches and unpacks the "-bin" distribution zip of a Gradle version.
/// A standalone capability; the generate pipeline never calls it.
pub async fn handle_fetch_distribution(args: &FetchDistributionArgs) -> Result<()> {
    let version = args.gradle_version.as_deref().unwrap_or_default();
    if version.is_empty() {
        bail!("no GradleVersion parameter specified");
    }

    let url = distribution_url(version);
    section(&format!("Fetch Gradle distribution {version}"));
    detail(&format!("downloading {url}"));
    let archive = download_into_tmp_dir(&url).await?;
    let unpacked = unpack_distribution(&archive).await?;
    done(&format!("distribution unpacked at: {}", unpacked.display()));
    Ok(())
}
