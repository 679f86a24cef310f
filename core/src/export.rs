//! Flat-file export: one UTF-8 CSV per table, header = field names.
//!
//! File export runs before the database load and is authoritative.
//! Any write error aborts the run.

use crate::{
    error::GenResult,
    pipeline::Dataset,
    table::{Table, TableVisitor},
};
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

/// Serialize `rows` as CSV into `writer`. An empty table still gets a header.
pub fn write_table<T: Table, W: io::Write>(rows: &[T], writer: W) -> GenResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(T::COLUMNS.iter().map(|c| c.name))?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV bytes for one table.
pub fn render_table<T: Table>(rows: &[T]) -> GenResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_table(rows, &mut buf)?;
    Ok(buf)
}

struct CsvExporter<'a> {
    dir:     &'a Path,
    written: Vec<PathBuf>,
}

impl TableVisitor for CsvExporter<'_> {
    fn visit<T: Table>(&mut self, rows: &[T]) -> GenResult<()> {
        let path = self.dir.join(T::file_name());
        let file = File::create(&path)?;
        write_table(rows, BufWriter::new(file))?;
        log::info!("export: wrote {} rows to {}", rows.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Write all seven tables into `dir`, creating it if needed.
/// Returns the written paths in export order.
pub fn export_dataset(dataset: &Dataset, dir: &Path) -> GenResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut exporter = CsvExporter {
        dir,
        written: Vec::with_capacity(7),
    };
    dataset.visit_tables(&mut exporter)?;
    Ok(exporter.written)
}
