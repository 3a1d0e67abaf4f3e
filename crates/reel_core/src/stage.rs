use crate::MAX_PROGRESS;

/// Maps a progress value to a human-readable stage label.
///
/// `thresholds` are ordered from the highest bound down; the first entry whose
/// bound is strictly below the progress wins. Below every bound the `initial`
/// label applies, and a saturated job always shows `terminal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTable {
    thresholds: &'static [(f64, &'static str)],
    initial: &'static str,
    terminal: &'static str,
}

impl StageTable {
    pub const PROCESSING: StageTable = StageTable {
        thresholds: &[
            (80.0, "Formatting for social media"),
            (60.0, "Generating clips"),
            (40.0, "Ranking highlights"),
            (20.0, "Processing audio cues"),
        ],
        initial: "Analyzing video frames",
        terminal: "Complete",
    };

    pub const UPLOAD: StageTable = StageTable {
        thresholds: &[(0.0, "Uploading")],
        initial: "Waiting",
        terminal: "Uploaded",
    };

    pub fn label_for(&self, progress: f64) -> &'static str {
        if progress >= MAX_PROGRESS {
            return self.terminal;
        }
        self.thresholds
            .iter()
            .find(|(bound, _)| progress > *bound)
            .map(|(_, label)| *label)
            .unwrap_or(self.initial)
    }

    pub fn terminal(&self) -> &'static str {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_labels_step_at_thresholds() {
        let table = StageTable::PROCESSING;
        assert_eq!(table.label_for(0.0), "Analyzing video frames");
        assert_eq!(table.label_for(20.0), "Analyzing video frames");
        assert_eq!(table.label_for(20.5), "Processing audio cues");
        assert_eq!(table.label_for(41.0), "Ranking highlights");
        assert_eq!(table.label_for(67.0), "Generating clips");
        assert_eq!(table.label_for(99.9), "Formatting for social media");
        assert_eq!(table.label_for(100.0), "Complete");
    }

    #[test]
    fn upload_labels() {
        let table = StageTable::UPLOAD;
        assert_eq!(table.label_for(0.0), "Waiting");
        assert_eq!(table.label_for(0.1), "Uploading");
        assert_eq!(table.label_for(100.0), "Uploaded");
    }
}
