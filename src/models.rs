use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File classification derived from the filename extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    /// Comma-separated values (`.csv`)
    Csv,

    /// Excel workbook, modern or legacy (`.xlsx`, `.xls`)
    Excel,

    /// Anything else, including files without an extension
    Unsupported,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => FileKind::Csv,
            Some("xlsx") | Some("xls") => FileKind::Excel,
            _ => FileKind::Unsupported,
        }
    }
}

/// Shape of one parsed table: data rows, columns, header names in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableShape {
    /// Number of data rows, excluding the header row
    pub rows: u64,

    /// Number of columns
    pub columns: usize,

    /// Column names in header order
    pub column_names: Vec<String>,
}

/// Summary of one sheet within a workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    /// Sheet name as the workbook metadata spells it
    pub name: String,

    /// Shape of the sheet's table
    pub shape: TableShape,
}

/// Parsed summary of a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSummary {
    /// A CSV file parsed into one table
    Csv(TableShape),

    /// A workbook with one summary per sheet, in metadata order
    Excel { sheets: Vec<SheetSummary> },

    /// Recognized as a file but not a supported tabular format
    Unsupported,
}

/// Per-file scan result: either a summary or the failure that prevented one
#[derive(Debug)]
pub struct FileReport {
    /// File name as listed in the directory (no path components)
    pub file_name: String,

    pub outcome: Result<FileSummary, ScanError>,
}

impl FileReport {
    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Statistics about a completed scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files that produced a report block (summary or error)
    pub files_reported: u64,

    /// Sheets summarized across all workbooks
    pub sheets_parsed: u64,

    /// Files reported as unsupported
    pub unsupported_files: u64,

    /// Files that failed to parse
    pub errors_encountered: u64,

    /// Duration of scan in seconds
    pub duration_secs: f64,
}

impl ScanStats {
    /// Fold one report into the counters
    pub fn record(&mut self, report: &FileReport) {
        self.files_reported += 1;

        match &report.outcome {
            Ok(FileSummary::Excel { sheets }) => {
                self.sheets_parsed += sheets.len() as u64;
            }
            Ok(FileSummary::Unsupported) => {
                self.unsupported_files += 1;
            }
            Ok(FileSummary::Csv(_)) => {}
            Err(_) => {
                self.errors_encountered += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("sales.csv")), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("report.xlsx")), FileKind::Excel);
        assert_eq!(FileKind::from_path(Path::new("legacy.xls")), FileKind::Excel);
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::Unsupported);
    }

    #[test]
    fn test_file_kind_case_insensitive() {
        assert_eq!(FileKind::from_path(Path::new("SALES.CSV")), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("Report.Xlsx")), FileKind::Excel);
        assert_eq!(FileKind::from_path(Path::new("old.XLS")), FileKind::Excel);
    }

    #[test]
    fn test_file_kind_with_dotted_name() {
        let path = PathBuf::from("/data/exports/2024.q1.csv");
        assert_eq!(FileKind::from_path(&path), FileKind::Csv);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = ScanStats::default();

        stats.record(&FileReport {
            file_name: "a.csv".into(),
            outcome: Ok(FileSummary::Csv(TableShape {
                rows: 3,
                columns: 2,
                column_names: vec!["id".into(), "amount".into()],
            })),
        });
        stats.record(&FileReport {
            file_name: "b.xlsx".into(),
            outcome: Ok(FileSummary::Excel {
                sheets: vec![
                    SheetSummary {
                        name: "Q1".into(),
                        shape: TableShape {
                            rows: 1,
                            columns: 1,
                            column_names: vec!["val".into()],
                        },
                    },
                    SheetSummary {
                        name: "Q2".into(),
                        shape: TableShape {
                            rows: 0,
                            columns: 1,
                            column_names: vec!["val".into()],
                        },
                    },
                ],
            }),
        });
        stats.record(&FileReport {
            file_name: "c.bin".into(),
            outcome: Ok(FileSummary::Unsupported),
        });
        stats.record(&FileReport {
            file_name: "d.csv".into(),
            outcome: Err(ScanError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        });

        assert_eq!(stats.files_reported, 4);
        assert_eq!(stats.sheets_parsed, 2);
        assert_eq!(stats.unsupported_files, 1);
        assert_eq!(stats.errors_encountered, 1);
    }
}
