// BaseExtractor implementation for go-outline
//
// Holds the per-file state shared by the outline pass: the diagnostic name and
// the non-fatal warnings recorded while walking the tree.

use tracing::warn;

use crate::error::OutlineWarning;

/// Base implementation for the outline extractor
pub struct BaseExtractor {
    pub file_path: String,
    pub warnings: Vec<OutlineWarning>,
}

impl BaseExtractor {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            warnings: Vec::new(),
        }
    }

    /// Record a non-fatal warning on the log channel and keep it for callers
    pub fn report(&mut self, warning: OutlineWarning) {
        if self.file_path.is_empty() {
            warn!("{}", warning);
        } else {
            warn!("{}: {}", self.file_path, warning);
        }
        self.warnings.push(warning);
    }
}
