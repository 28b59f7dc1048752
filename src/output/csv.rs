// CSV frequency tables: `<data-dir>/<category>.csv` with a `word,frequency`
// header followed by rows in descending frequency order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::traits::ResultWriter;
use crate::words::category::CategoryId;
use crate::words::count::WordCount;

const HEADER: [&str; 2] = ["word", "frequency"];

#[derive(Serialize)]
struct FrequencyRow<'a> {
    word: &'a str,
    frequency: u64,
}

/// Writes one CSV file per category into a data directory.
pub struct CsvWriter {
    data_dir: PathBuf,
}

impl CsvWriter {
    /// Create the writer, creating `data_dir` (and parents) if absent.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, category: &CategoryId) -> PathBuf {
        self.data_dir.join(format!("{category}.csv"))
    }
}

impl ResultWriter for CsvWriter {
    fn write(&self, category: &CategoryId, counts: &WordCount, limit: usize) -> Result<PathBuf> {
        let path = self.path_for(category);

        // Header is written by hand so that an empty table still gets one.
        let mut wtr = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        wtr.write_record(HEADER)
            .with_context(|| format!("Failed to write header to {}", path.display()))?;

        let rows = counts.most_common(limit);
        for &(word, frequency) in &rows {
            wtr.serialize(FrequencyRow { word, frequency })
                .with_context(|| format!("Failed to write row to {}", path.display()))?;
        }

        wtr.flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;

        debug!(
            category = %category,
            rows = rows.len(),
            path = %path.display(),
            "Wrote frequency table"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_uses_category_id() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        assert_eq!(
            writer.path_for(&CategoryId::new("world")),
            dir.path().join("world.csv")
        );
    }

    #[test]
    fn test_new_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
