use crate::extractor::KeySet;
use serde::Serialize;

/// Outcome of comparing a bibliography key set against a citation key set.
///
/// The three listings are disjoint projections of the two inputs:
/// `unused ∪ used` is exactly the bibliography, `used ∪ unknown` is exactly
/// the citations. All listings are sorted ascending.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Declared in the bibliography but never cited.
    pub unused: Vec<String>,
    /// Declared and cited.
    pub used: Vec<String>,
    /// Cited but not declared anywhere.
    pub unknown: Vec<String>,
    pub stats: AnalysisStats,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisStats {
    pub total_bib_keys: usize,
    pub total_citations: usize,
    pub used: usize,
    pub unused: usize,
    pub unknown: usize,
}

impl AnalysisReport {
    pub fn compare(bib_keys: &KeySet, citations: &KeySet) -> Self {
        let unused: Vec<String> = bib_keys.difference(citations).cloned().collect();
        let used: Vec<String> = bib_keys.intersection(citations).cloned().collect();
        let unknown: Vec<String> = citations.difference(bib_keys).cloned().collect();

        let stats = AnalysisStats {
            total_bib_keys: bib_keys.len(),
            total_citations: citations.len(),
            used: used.len(),
            unused: unused.len(),
            unknown: unknown.len(),
        };

        Self {
            unused,
            used,
            unknown,
            stats,
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.unused.is_empty() || !self.unknown.is_empty()
    }
}
