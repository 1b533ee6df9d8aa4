//! Completion data handed to observers when a build finishes.

use indexmap::IndexMap;

/// Mapping from output artifact name to its size in bytes.
///
/// Built fresh by the host for every completion event. Iteration follows
/// insertion order so observers report artifacts in the order the pipeline
/// emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactReport {
    artifacts: IndexMap<String, u64>,
}

impl ArtifactReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an artifact. A repeated name replaces the earlier size but
    /// keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, bytes: u64) {
        self.artifacts.insert(name.into(), bytes);
    }

    /// Size of a single artifact, if present.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.artifacts.get(name).copied()
    }

    /// Iterate over `(name, bytes)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.artifacts.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for ArtifactReport {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (name, bytes) in iter {
            report.insert(name, bytes);
        }
        report
    }
}
