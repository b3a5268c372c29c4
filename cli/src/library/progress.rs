use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use zsnap_library::SnapshotKey;

/// Spinner shown while the pool is searched for a group's snapshots.
pub struct SearchProgress {
    bar: ProgressBar,
    key: SnapshotKey,
}

impl SearchProgress {
    pub fn start(key: &SnapshotKey) -> anyhow::Result<Self> {
        Self::with_bar(ProgressBar::new_spinner(), key)
    }

    fn with_bar(bar: ProgressBar, key: &SnapshotKey) -> anyhow::Result<Self> {
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")?.tick_chars("-\\|/ "),
        );
        bar.set_message(format!("Searching snapshots with key {}...", key));
        bar.enable_steady_tick(Duration::from_millis(120));

        Ok(SearchProgress {
            bar,
            key: key.clone(),
        })
    }

    /// Stops the spinner, leaving a summary line behind.
    pub fn found(self, count: usize) -> String {
        let summary = match count {
            1 => format!("Found 1 snapshot with key {}", self.key),
            n => format!("Found {} snapshots with key {}", n, self.key),
        };

        self.bar.finish_with_message(summary.clone());

        summary
    }

    /// Stops the spinner when the search itself failed.
    pub fn failed(self) {
        self.bar.abandon_with_message(format!("Search for key {} failed", self.key));
    }
}

#[cfg(test)]
mod tests {
    use zsnap_library::{DatasetId, make_snapshot_key};

    use super::*;

    fn key() -> SnapshotKey {
        make_snapshot_key(&DatasetId::new("tank", "home"), "")
    }

    #[test]
    fn test_found_reports_count() -> anyhow::Result<()> {
        let progress = SearchProgress::with_bar(ProgressBar::hidden(), &key())?;

        assert_eq!(
            progress.bar.message(),
            "Searching snapshots with key tank/home@tank-home..."
        );
        assert_eq!(
            progress.found(3),
            "Found 3 snapshots with key tank/home@tank-home"
        );

        Ok(())
    }

    #[test]
    fn test_found_singular() -> anyhow::Result<()> {
        let progress = SearchProgress::with_bar(ProgressBar::hidden(), &key())?;

        assert_eq!(progress.found(1), "Found 1 snapshot with key tank/home@tank-home");

        Ok(())
    }
}
