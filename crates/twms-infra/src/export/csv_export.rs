//! CSV export

use std::io::Write;
use std::path::Path;

use twms_domain::TruckRecord;
use twms_types::{Error, Result};

pub const CSV_HEADER: [&str; 9] = [
    "ID",
    "Driver",
    "Plate",
    "Destination",
    "EmptyWeight",
    "TotalWeight",
    "Status",
    "Timestamp",
    "BoxCount",
];

/// Write one row per truck after the header row
pub fn write_csv<W: Write>(records: &[TruckRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::Export(e.to_string()))?;

    for truck in records {
        csv_writer
            .write_record([
                truck.id().to_string(),
                truck.driver_name.clone(),
                truck.license_plate.clone(),
                truck.destination.clone(),
                truck.empty_weight().to_string(),
                truck.total_weight().to_string(),
                truck.status().label().to_string(),
                truck.timestamp(),
                truck.cargo().len().to_string(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export to `path`; an empty collection writes nothing and is an error
pub fn export_csv(records: &[TruckRecord], path: &Path) -> Result<usize> {
    if records.is_empty() {
        return Err(Error::NoData);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    log::info!("exported {} trucks to {}", records.len(), path.display());
    Ok(records.len())
}
