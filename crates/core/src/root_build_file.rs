use std::path::{Path, PathBuf};

/// Outcome of the root build file search.
///
/// The full candidate list is kept next to the chosen path so the
/// ambiguity policy stays inspectable: when several roots are found the
/// first by sorted path-component order wins, a best-effort tie-break
/// rather than a correctness guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootBuildFile {
    chosen: PathBuf,
    candidates: Vec<PathBuf>,
}

impl RootBuildFile {
    /// Picks the first candidate; the list must already be in sorted
    /// component order. Returns `None` for an empty candidate list.
    #[must_use]
    pub fn select(candidates: Vec<PathBuf>) -> Option<Self> {
        let chosen = candidates.first()?.clone();
        Some(Self { chosen, candidates })
    }

    #[must_use]
    pub fn chosen(&self) -> &Path {
        &self.chosen
    }

    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// True when more than one root candidate was found and the chosen
    /// path is only a tie-break.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}
