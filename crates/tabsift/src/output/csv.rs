//! Writing the cleaned dataset as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::{Result, SiftError};
use crate::schema::Dataset;

/// Suffix appended to the input stem for the cleaned copy.
pub const CLEANED_SUFFIX: &str = "_cleaned";

/// Path of the cleaned copy: `<input-dir>/<input-stem>_cleaned.csv`.
pub fn cleaned_csv_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.csv", stem, CLEANED_SUFFIX))
}

/// Write a dataset as comma-delimited UTF-8 with a header row.
///
/// An existing file is overwritten. Missing cells are written as empty fields.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| SiftError::io(path, e))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(dataset.column_names())?;
    for row in 0..dataset.row_count() {
        writer.write_record(
            dataset
                .columns()
                .iter()
                .map(|column| column.values[row].to_csv_field()),
        )?;
    }

    writer.flush().map_err(|e| SiftError::io(path, e))?;
    Ok(())
}
