//! Lightweight backup snapshot: `id|driver|total weight` per line

use std::fs;
use std::path::PathBuf;

use twms_domain::repository::BackupWriter;
use twms_domain::TruckRecord;
use twms_types::Error;

pub fn format_backup(records: &[TruckRecord]) -> String {
    records
        .iter()
        .map(|truck| {
            format!(
                "{}|{}|{}\n",
                truck.id(),
                truck.driver_name,
                truck.total_weight()
            )
        })
        .collect()
}

pub struct FileBackupWriter {
    path: PathBuf,
}

impl FileBackupWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BackupWriter for FileBackupWriter {
    fn write_backup(&self, records: &[TruckRecord]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format_backup(records))?;
        log::debug!("backup of {} trucks written to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use twms_domain::{CargoItem, WeightModel};

    #[test]
    fn test_backup_lines() {
        let mut first = TruckRecord::new("Ali", "P1", "D", 1500)
            .with_id(1)
            .with_cargo([CargoItem::new(450, "mixed")]);
        WeightModel::default().recompute(&mut first);
        let second = TruckRecord::new("Sana", "P2", "D", 0).with_id(2);

        assert_eq!(format_backup(&[first, second]), "1|Ali|1950\n2|Sana|0\n");
    }

    #[test]
    fn test_write_backup_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("backup.txt");
        let writer = FileBackupWriter::new(path.clone());
        writer
            .write_backup(&[TruckRecord::new("Ali", "P1", "D", 10).with_id(1)])
            .unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "1|Ali|0\n");
    }
}
