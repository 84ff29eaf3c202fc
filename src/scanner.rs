use crate::models::{FileKind, FileReport, FileSummary};
use crate::reader;
use crate::utils;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Start a scan of one folder's immediate entries.
///
/// Fails if the folder itself cannot be listed; that is the only fatal
/// condition. Everything after this point is reported per file through
/// the returned iterator.
pub fn scan_folder<P: AsRef<Path>>(folder: P) -> Result<ScanIter> {
    let folder = folder
        .as_ref()
        .canonicalize()
        .context("Failed to canonicalize folder path")?;

    utils::validate_path(&folder)?;

    info!("Starting scan of: {}", folder.display());

    let entries = fs::read_dir(&folder)
        .with_context(|| format!("Cannot list directory {}", folder.display()))?;

    Ok(ScanIter { entries })
}

/// Lazy sequence of per-file reports over one directory listing.
///
/// Non-regular entries (subdirectories, sockets, symlinks to directories)
/// are skipped silently. A file that fails to parse yields a report
/// carrying the error; iteration always continues to the next entry.
pub struct ScanIter {
    entries: fs::ReadDir,
}

impl Iterator for ScanIter {
    type Item = FileReport;

    fn next(&mut self) -> Option<FileReport> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    // No file name to attach a report to; log and move on
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                debug!("Skipping non-file entry: {}", path.display());
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();

            let outcome = match FileKind::from_path(&path) {
                FileKind::Csv => reader::csv_shape(&path).map(FileSummary::Csv),
                FileKind::Excel => {
                    reader::workbook_summary(&path).map(|sheets| FileSummary::Excel { sheets })
                }
                FileKind::Unsupported => Ok(FileSummary::Unsupported),
            };

            if let Err(ref e) = outcome {
                debug!("Failed to parse {}: {}", path.display(), e);
            }

            return Some(FileReport { file_name, outcome });
        }
    }
}

/// Eagerly collect a folder's reports, for tests and simple callers
pub fn scan_to_vec<P: AsRef<Path>>(folder: P) -> Result<Vec<FileReport>> {
    Ok(scan_folder(folder)?.collect())
}
