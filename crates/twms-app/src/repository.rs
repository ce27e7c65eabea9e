//! Repository adapters for persistence layer

use twms_domain::repository::BackupWriter;
use twms_infra::persistence::{FileBackupWriter, FileTruckRepository};
use twms_types::Result;

use crate::app::FleetService;
use crate::config::Config;

/// Open the file-based truck repository
pub fn open_truck_repo(config: &Config) -> Result<FileTruckRepository> {
    Ok(FileTruckRepository::new(config.data_path()?, config.weight_model()?))
}

/// Backup writer, or `None` when automatic backups are disabled
pub fn open_backup_writer(config: &Config) -> Result<Option<FileBackupWriter>> {
    if !config.auto_backup {
        return Ok(None);
    }
    Ok(Some(FileBackupWriter::new(config.backup_path()?)))
}

/// Load the stored collection into a service wired to the configured files
pub fn open_fleet_service(config: &Config) -> Result<FleetService> {
    let repository = open_truck_repo(config)?;
    let backup = open_backup_writer(config)?;
    FleetService::open(
        Box::new(repository),
        backup.map(|writer| Box::new(writer) as Box<dyn BackupWriter>),
        config.weight_model()?,
    )
}
