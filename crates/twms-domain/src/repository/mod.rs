//! Repository trait definitions for data persistence

use twms_types::Error;

use crate::model::TruckRecord;

/// Full-snapshot storage for the truck collection
pub trait TruckRepository {
    /// Load every record, with derived fields already recomputed
    fn load_all(&self) -> Result<Vec<TruckRecord>, Error>;

    /// Replace the stored snapshot with `records`
    fn save_all(&self, records: &[TruckRecord]) -> Result<(), Error>;
}

/// Lightweight summary snapshot written after every change
pub trait BackupWriter {
    fn write_backup(&self, records: &[TruckRecord]) -> Result<(), Error>;
}
