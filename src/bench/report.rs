use std::fs::{File, OpenOptions};
use std::io::{Result, Write};
use std::path::Path;
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Averaged timings measured at one fill level.
#[derive(Debug, Clone, PartialEq)]
pub struct FillLevelRow {
    pub fill_percentage: f64,
    pub avg_insert_ns: u64,
    pub avg_delete_ns: u64,
}

#[cfg_attr(test, automock)]
pub trait ReportSink {
    fn write_header(&mut self, name: &str) -> Result<()>;

    fn write_row(&mut self, row: &FillLevelRow) -> Result<()>;
}

pub struct CsvReportSink {
    file: File,
}

impl CsvReportSink {
    pub fn create(path: &Path) -> Result<CsvReportSink> {
        Ok(CsvReportSink {
            file: OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?,
        })
    }
}

impl ReportSink for CsvReportSink {
    fn write_header(&mut self, name: &str) -> Result<()> {
        writeln!(self.file, "{}", name)?;
        writeln!(self.file, "fill_percentage,insert_time_ns,delete_time_ns")
    }

    fn write_row(&mut self, row: &FillLevelRow) -> Result<()> {
        writeln!(
            self.file,
            "{},{},{}",
            row.fill_percentage, row.avg_insert_ns, row.avg_delete_ns
        )
    }
}

/// Collects rows in memory, for callers that inspect results instead of
/// shipping them to a file.
pub struct MemoryReportSink {
    name: Option<String>,
    rows: Vec<FillLevelRow>,
}

impl MemoryReportSink {
    pub fn new() -> MemoryReportSink {
        MemoryReportSink {
            name: None,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rows(&self) -> &[FillLevelRow] {
        &self.rows
    }
}

impl ReportSink for MemoryReportSink {
    fn write_header(&mut self, name: &str) -> Result<()> {
        self.name = Some(name.to_string());
        Ok(())
    }

    fn write_row(&mut self, row: &FillLevelRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}
