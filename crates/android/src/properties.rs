use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static DISTRIBUTION_URL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^distributionUrl.*$").expect("hardcoded regex must compile")
});

/// Rewrites the `distributionUrl` line of a gradle-wrapper.properties
/// content to the "-all" distribution zip of `version`, leaving every
/// other line byte-identical and in place.
#[must_use]
pub fn rewrite_distribution_url(content: &str, version: &str) -> String {
    let line = format!(
        r"distributionUrl=https\://services.gradle.org/distributions/gradle-{version}-all.zip"
    );
    DISTRIBUTION_URL_LINE
        .replace_all(content, NoExpand(&line))
        .to_string()
}
