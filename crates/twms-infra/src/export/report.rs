//! Plain-text fleet report

use std::path::Path;

use chrono::NaiveDateTime;
use twms_domain::model::TIMESTAMP_FORMAT;
use twms_domain::TruckRecord;
use twms_types::{Error, Result};

pub fn generate_report(records: &[TruckRecord], generated_at: NaiveDateTime) -> String {
    let mut report = String::new();
    report.push_str("TRUCK WEIGHT MANAGEMENT SYSTEM - REPORT\n");
    report.push_str(&format!(
        "Generated: {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    report.push_str("---------------------------------------\n\n");

    for truck in records {
        report.push_str(&format!("Truck #{}\n", truck.id()));
        report.push_str(&format!("Driver: {}\n", truck.driver_name));
        report.push_str(&format!("Plate: {}\n", truck.license_plate));
        report.push_str(&format!("Destination: {}\n", truck.destination));
        report.push_str(&format!("Total Weight: {} kg\n", truck.total_weight()));
        report.push_str(&format!("Status: {}\n", truck.status()));
        report.push_str(&format!("Timestamp: {}\n", truck.timestamp()));
        report.push_str(&format!("Boxes: {}\n\n", truck.cargo().len()));
    }

    report
}

/// Write the report to `path`; an empty collection writes nothing and is an error
pub fn write_report(records: &[TruckRecord], path: &Path, generated_at: NaiveDateTime) -> Result<()> {
    if records.is_empty() {
        return Err(Error::NoData);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_report(records, generated_at))?;
    log::info!("report for {} trucks written to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use twms_domain::{CargoItem, OperatorStatus, WeightModel};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let mut truck = TruckRecord::new("Ali", "LEA-1", "Karachi", 1800)
            .with_id(1)
            .with_created_at(at("2024-05-01 10:30:00"))
            .with_cargo([CargoItem::new(300, "Steel")]);
        WeightModel::default().recompute(&mut truck);
        truck.set_operator_status(OperatorStatus::InTransit);

        let report = generate_report(&[truck], at("2024-06-01 12:00:00"));
        let expected = "\
TRUCK WEIGHT MANAGEMENT SYSTEM - REPORT
Generated: 2024-06-01 12:00:00
---------------------------------------

Truck #1
Driver: Ali
Plate: LEA-1
Destination: Karachi
Total Weight: 2100 kg
Status: In Transit
Timestamp: 2024-05-01 10:30:00
Boxes: 1

";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_write_report_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_report.txt");
        assert!(matches!(
            write_report(&[], &path, at("2024-06-01 12:00:00")),
            Err(Error::NoData)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_report_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_report.txt");
        let truck = TruckRecord::new("Ali", "LEA-1", "Karachi", 100).with_id(1);
        write_report(&[truck], &path, at("2024-06-01 12:00:00")).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Truck #1\n"));
    }
}
