use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::log;
use crate::out::{Out, blank, error, info};
use crate::patch::Outcome;
use crate::shell;

/// Counters for a single run.
#[derive(Debug, Default)]
pub(crate) struct Summary {
    /// Number of candidate files found.
    pub(crate) found: usize,
    pub(crate) modified: usize,
    pub(crate) skipped: usize,
    pub(crate) failed: usize,
    /// Distinct directories containing a modified file.
    pub(crate) directories: BTreeSet<PathBuf>,
}

impl Summary {
    /// Summary of a single file with the given outcome.
    pub(crate) fn from_outcome(path: &Path, outcome: &Outcome) -> Self {
        let mut summary = Self::default();

        match outcome {
            Outcome::Modified { .. } => {
                summary.modified = 1;

                if let Some(parent) = path.parent() {
                    summary.directories.insert(parent.to_path_buf());
                }
            }
            Outcome::Skipped(..) => {
                summary.skipped = 1;
            }
            Outcome::Failed(..) => {
                summary.failed = 1;
            }
        }

        summary
    }

    /// Merge another summary into this one.
    pub(crate) fn merge(&mut self, other: Summary) {
        self.found += other.found;
        self.modified += other.modified;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.directories.extend(other.directories);
    }

    /// Print the summary.
    pub(crate) fn print(&self, o: &mut Out<'_>) -> Result<()> {
        tracing::info!(
            "Total modified files: {} of {} (skipped: {}, failed: {})",
            self.modified,
            self.found,
            self.skipped,
            self.failed
        );

        info!(o, "Total modified files: {}", self.modified);

        if self.skipped > 0 {
            blank!(o, "Skipped files: {}", self.skipped);
        }

        if self.failed > 0 {
            error!(o, "Failed files: {} (see {})", self.failed, log::LOG_FILE);
        }

        if self.modified > 0 {
            info!(o, "Directories with modified files:");
            let mut o = o.indent(1);

            for dir in &self.directories {
                blank!(o, "{}", shell::escape(dir.as_os_str()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use anyhow::anyhow;

    use super::Summary;
    use crate::patch::{Outcome, Skip};

    #[test]
    fn directories_are_recorded_once() {
        let mut summary = Summary::default();

        let files = [
            (Path::new("a/1.flac"), Outcome::Modified { retyped: 1 }),
            (Path::new("a/2.flac"), Outcome::Modified { retyped: 2 }),
            (Path::new("a/b/3.flac"), Outcome::Modified { retyped: 1 }),
            (Path::new("c/4.flac"), Outcome::Skipped(Skip::NoPictures)),
            (Path::new("d/5.flac"), Outcome::Failed(anyhow!("broken"))),
        ];

        for (path, outcome) in &files {
            summary.merge(Summary::from_outcome(path, outcome));
        }

        assert_eq!(summary.modified, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);

        let directories = summary.directories.into_iter().collect::<Vec<_>>();
        assert_eq!(directories, [PathBuf::from("a"), PathBuf::from("a/b")]);
    }
}
