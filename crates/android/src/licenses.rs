use crate::sdk::AndroidSdk;
use anyhow::{Context, Result};
use wrapgen_utils::{detail, done};

/// License id mapped to the acceptance file content the SDK license
/// manager expects: a newline followed by the accepted hash.
pub const LICENSE_FILES: [(&str, &str); 3] = [
    (
        "android-sdk-license",
        "\n8933bad161af4178b1185d1a37fbf41ea5269c55",
    ),
    (
        "android-sdk-preview-license",
        "\n84831b9409646a918e30573bab4c9c91346d8abd",
    ),
    (
        "intel-android-extra-license",
        "\nd975f751698a77b662f1254ddbeed3901e976f5a",
    ),
];

/// Ensures every required license acceptance file exists under the SDK's
/// licenses directory. Existing files are never overwritten; a
/// pre-existing file may hold a different but still valid acceptance
/// record.
///
/// # Errors
/// Returns error if the licenses directory or a license file cannot be
/// created.
pub async fn ensure_license_files(sdk: &AndroidSdk) -> Result<()> {
    let licenses_dir = sdk.licenses_dir();
    if !licenses_dir.is_dir() {
        detail("licenses dir not exist, generating...");
        tokio::fs::create_dir(&licenses_dir)
            .await
            .with_context(|| format!("failed to create dir at: {}", licenses_dir.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&licenses_dir, std::fs::Permissions::from_mode(0o777))
                .await
                .with_context(|| {
                    format!("failed to set permissions on: {}", licenses_dir.display())
                })?;
        }
    }

    for (name, content) in LICENSE_FILES {
        let license_path = licenses_dir.join(name);
        if license_path.exists() {
            done(&format!("{name} exist"));
            continue;
        }
        detail(&format!("{name} not exist, generating..."));
        tokio::fs::write(&license_path, content)
            .await
            .with_context(|| format!("failed to write license at: {}", license_path.display()))?;
        done(&format!("{name} generated"));
    }

    Ok(())
}
