pub mod error;
pub mod models;
pub mod reader;
pub mod report;
pub mod scanner;
pub mod utils;

pub use error::ScanError;
pub use models::{FileKind, FileReport, FileSummary, ScanStats, SheetSummary, TableShape};
pub use report::Reporter;
pub use scanner::{scan_folder, scan_to_vec, ScanIter};
