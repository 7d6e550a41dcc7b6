/// Per-file result of a patch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Patched,
    SkippedMissing,
    SkippedUnknown,
    Failed,
}

impl FileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patched => "PATCHED",
            Self::SkippedMissing => "SKIPPED_MISSING",
            Self::SkippedUnknown => "SKIPPED_UNKNOWN",
            Self::Failed => "FAILED",
        }
    }

    /// Whether the file ended up rewritten with the extension block
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Patched)
    }
}

/// Tally of a full patch run, one outcome per resource identifier
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<(String, FileOutcome)>,
}

impl RunSummary {
    pub fn record(&mut self, resource_id: &str, outcome: FileOutcome) {
        self.outcomes.push((resource_id.to_string(), outcome));
    }

    /// Number of files successfully patched
    pub fn patched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    /// Number of resources attempted, skips and failures included
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_patched(&self) -> bool {
        self.patched() == self.total()
    }

    pub fn outcomes(&self) -> &[(String, FileOutcome)] {
        &self.outcomes
    }
}
