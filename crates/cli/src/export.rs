use anyhow::Result;
use wrapgen_utils::run_with_stdin;

/// Hands a key/value pair to envman, the pipeline's shared-environment
/// mechanism, so later steps can read it. The value travels on stdin.
pub async fn export_environment(key: &str, value: &str) -> Result<()> {
    run_with_stdin("envman", &["add", "--key", key], value).await?;
    Ok(())
}
