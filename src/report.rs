use crate::models::{FileReport, FileSummary, TableShape};
use std::io::{self, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 60;

/// Renders scan results as human-readable text.
///
/// The scanner produces structured reports; this is the console consumer.
/// Anything implementing `Write` works, which keeps the output contract
/// testable without capturing stdout.
pub struct Reporter<W: Write> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Printed once before the first file block
    pub fn scan_header(&mut self, folder: &Path) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Scanning folder: {}", folder.display())?;
        writeln!(self.writer)
    }

    /// One block per file: separator, name, then the summary or the error
    pub fn report(&mut self, report: &FileReport) -> io::Result<()> {
        writeln!(self.writer, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.writer, "File: {}", report.file_name)?;

        match &report.outcome {
            Ok(FileSummary::Csv(shape)) => {
                writeln!(self.writer, "Type: CSV")?;
                self.shape(shape)?;
            }
            Ok(FileSummary::Excel { sheets }) => {
                writeln!(self.writer, "Type: Excel")?;
                writeln!(self.writer, "Sheets found: {}", sheets.len())?;
                for sheet in sheets {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "Sheet Name: {}", sheet.name)?;
                    self.shape(&sheet.shape)?;
                }
            }
            Ok(FileSummary::Unsupported) => {
                writeln!(self.writer, "Unsupported file format")?;
            }
            Err(e) => {
                writeln!(self.writer, "Error reading file: {}", e)?;
            }
        }

        Ok(())
    }

    /// Printed once after the last entry, errors included
    pub fn completion(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Folder scan complete.")?;
        self.writer.flush()
    }

    fn shape(&mut self, shape: &TableShape) -> io::Result<()> {
        writeln!(
            self.writer,
            "Rows: {}, Columns: {}",
            shape.rows, shape.columns
        )?;
        writeln!(self.writer, "Column Names:")?;
        for name in &shape.column_names {
            writeln!(self.writer, "   - {}", name)?;
        }
        Ok(())
    }
}
