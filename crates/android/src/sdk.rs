use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Path oracle for an installed Android SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidSdk {
    home: PathBuf,
}

impl AndroidSdk {
    /// # Errors
    /// Returns error if `home` is not an existing directory.
    pub fn new(home: &Path) -> Result<Self> {
        if !home.is_dir() {
            bail!("AndroidHome ({}) not exists", home.display());
        }
        Ok(Self {
            home: home.to_path_buf(),
        })
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[must_use]
    pub fn licenses_dir(&self) -> PathBuf {
        self.home.join("licenses")
    }

    /// The wrapper template the SDK ships under tools/templates, used when
    /// no standalone Gradle installation is available.
    #[must_use]
    pub fn wrapper_template_dir(&self) -> PathBuf {
        self.home
            .join("tools")
            .join("templates")
            .join("gradle")
            .join("wrapper")
    }
}
