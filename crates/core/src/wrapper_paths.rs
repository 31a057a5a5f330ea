use std::path::{Path, PathBuf};

/// File set that makes up a usable Gradle wrapper, anchored at the
/// directory of the root build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperPaths {
    root_dir: PathBuf,
}

impl WrapperPaths {
    /// Derives the wrapper layout from the chosen root build file; the
    /// wrapper script lives as a sibling of that file.
    #[must_use]
    pub fn for_root_build_file(root_build_file: &Path) -> Self {
        let root_dir = root_build_file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { root_dir }
    }

    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    #[must_use]
    pub fn gradlew(&self) -> PathBuf {
        self.root_dir.join("gradlew")
    }

    #[must_use]
    pub fn gradlew_bat(&self) -> PathBuf {
        self.root_dir.join("gradlew.bat")
    }

    #[must_use]
    pub fn gradle_dir(&self) -> PathBuf {
        self.root_dir.join("gradle")
    }

    #[must_use]
    pub fn wrapper_dir(&self) -> PathBuf {
        self.gradle_dir().join("wrapper")
    }

    #[must_use]
    pub fn wrapper_jar(&self) -> PathBuf {
        self.wrapper_dir().join("gradle-wrapper.jar")
    }

    #[must_use]
    pub fn wrapper_properties(&self) -> PathBuf {
        self.wrapper_dir().join("gradle-wrapper.properties")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_root_build_file() {
        let paths = WrapperPaths::for_root_build_file(Path::new("/work/project/build.gradle"));
        assert_eq!(paths.root_dir(), Path::new("/work/project"));
        assert_eq!(paths.gradlew(), PathBuf::from("/work/project/gradlew"));
        assert_eq!(
            paths.gradlew_bat(),
            PathBuf::from("/work/project/gradlew.bat")
        );
        assert_eq!(
            paths.wrapper_jar(),
            PathBuf::from("/work/project/gradle/wrapper/gradle-wrapper.jar")
        );
        assert_eq!(
            paths.wrapper_properties(),
            PathBuf::from("/work/project/gradle/wrapper/gradle-wrapper.properties")
        );
    }

    #[test]
    fn test_bare_file_name_falls_back_to_current_dir() {
        let paths = WrapperPaths::for_root_build_file(Path::new("build.gradle"));
        assert_eq!(paths.root_dir(), Path::new("."));
        assert_eq!(paths.gradlew(), PathBuf::from("./gradlew"));
    }
}
