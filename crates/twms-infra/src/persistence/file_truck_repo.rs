//! File-based truck repository implementation

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use twms_domain::repository::TruckRepository;
use twms_domain::{TruckRecord, WeightModel};
use twms_types::Error;

use super::text_codec;

/// Stores the truck collection in the line-oriented data file.
///
/// Saving rewrites the whole file in place; a crash mid-write can leave it
/// truncated.
pub struct FileTruckRepository {
    data_path: PathBuf,
    model: WeightModel,
}

impl FileTruckRepository {
    pub fn new(data_path: PathBuf, model: WeightModel) -> Self {
        Self { data_path, model }
    }
}

impl TruckRepository for FileTruckRepository {
    /// A missing data file is an empty collection
    fn load_all(&self) -> Result<Vec<TruckRecord>, Error> {
        if !self.data_path.exists() {
            log::debug!("no data file at {}", self.data_path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.data_path)?;
        let mut records = text_codec::decode(&content)?;
        for record in &mut records {
            self.model.recompute(record);
        }

        log::debug!(
            "loaded {} trucks from {}",
            records.len(),
            self.data_path.display()
        );
        Ok(records)
    }

    fn save_all(&self, records: &[TruckRecord]) -> Result<(), Error> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.data_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text_codec::encode(records).as_bytes())?;
        writer.flush()?;

        log::debug!(
            "saved {} trucks to {}",
            records.len(),
            self.data_path.display()
        );
        Ok(())
    }
}
