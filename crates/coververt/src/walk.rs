use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use ignore::WalkBuilder;

use crate::out::{Out, blank, error, info, warn};
use crate::patch::{self, Outcome};
use crate::shell;
use crate::summary::Summary;

/// Suffix of candidate files, matched ignoring ASCII case.
const SUFFIX: &str = ".flac";

/// Test if the path names a candidate file.
pub(crate) fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    let name = name.as_encoded_bytes();

    let Some(n) = name.len().checked_sub(SUFFIX.len()) else {
        return false;
    };

    name[n..].eq_ignore_ascii_case(SUFFIX.as_bytes())
}

/// Find all candidate files under `root`.
///
/// Hidden and ignored files are included and symbolic links are not
/// followed. Entries which cannot be read are logged and skipped.
pub(crate) fn find(o: &mut Out<'_>, root: &Path) -> Result<Vec<PathBuf>> {
    fs::metadata(root).with_context(|| anyhow!("Reading directory {}", root.display()))?;

    let mut files = Vec::new();

    let walk = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Failed to read directory entry: {e}");
                warn!(o => v, "Failed to read directory entry: {e}");
                continue;
            }
        };

        let Some(ty) = entry.file_type() else {
            continue;
        };

        if ty.is_file() && is_candidate(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Patch every candidate file under `root`.
pub(crate) fn run(o: &mut Out<'_>, root: &Path) -> Result<Summary> {
    tracing::info!(
        "Processing FLAC files in: {} and all subdirectories",
        root.display()
    );

    info!(
        o,
        "Processing FLAC files in: {} and all subdirectories",
        shell::escape(root.as_os_str())
    );

    let files = find(o, root)?;

    let mut summary = Summary::default();

    if files.is_empty() {
        tracing::info!("No FLAC files found");
        warn!(o, "No FLAC files found");
        return Ok(summary);
    }

    tracing::info!("Found {} FLAC files", files.len());
    info!(o, "Found {} FLAC files", files.len());
    summary.found = files.len();

    for path in &files {
        let relative = path.strip_prefix(root).unwrap_or(path);
        tracing::info!("Processing: {}", relative.display());

        let outcome = patch::patch(path);
        report(o, relative, &outcome)?;
        summary.merge(Summary::from_outcome(path, &outcome));
    }

    Ok(summary)
}

fn report(o: &mut Out<'_>, path: &Path, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Modified { retyped } => {
            tracing::info!(
                "Updated cover tag in {} ({retyped} pictures)",
                path.display()
            );

            info!(o, "Updated cover in {}", shell::escape(path.as_os_str()));
        }
        Outcome::Skipped(skip) => {
            tracing::info!("{skip}, skipping: {}", path.display());
            blank!(o => v, "{skip}, skipping: {}", shell::escape(path.as_os_str()));
        }
        Outcome::Failed(e) => {
            tracing::error!("Error processing {}: {e:#}", path.display());
            error!(o => v, "Error processing {}", shell::escape(path.as_os_str()));
            let mut o = o.indent(1);
            blank!(o => v, "{e:#}");
        }
    }

    Ok(())
}
