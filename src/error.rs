use thiserror::Error;

/// Failure while reading one file's contents.
/// Always caught at the single-file granularity; the scan continues past it.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Workbook(#[from] calamine::Error),
}
