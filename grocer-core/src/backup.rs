//! Persists a table to a plain-text backup file.

use crate::error::BackupError;
use crate::table::FrequencyTable;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

/// Creates (or truncates) `path` and writes the table's backup lines into it.
pub fn save<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> Result<usize, BackupError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        warn!("backup {} unavailable: {}", path.display(), source);
        BackupError::Create {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let lines = table.write_backup(file)?;
    info!("wrote {} entries to {}", lines, path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn groceries() -> FrequencyTable {
        vec!["Apples", "bananas", "apples", "GRAPES", "apples"]
            .into_iter()
            .collect()
    }

    #[test]
    fn writes_backup_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frequency.dat");
        assert_eq!(save(&groceries(), &path).unwrap(), 3);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "apples 3\nbananas 1\ngrapes 1\n"
        );
    }

    #[test]
    fn overwrites_previous_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frequency.dat");
        fs::write(&path, "stale 99\nleftover 1\nlines 4\nhere 2\n").unwrap();
        save(&groceries(), &path).unwrap();
        save(&groceries(), &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "apples 3\nbananas 1\ngrapes 1\n"
        );
    }

    #[test]
    fn empty_table_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frequency.dat");
        assert_eq!(save(&FrequencyTable::new(), &path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("frequency.dat");
        let table = groceries();
        match save(&table, &path) {
            Err(BackupError::Create { .. }) => {}
            other => panic!("expected create failure, got {:?}", other),
        }
        assert_eq!(table.len(), 3);
    }
}
