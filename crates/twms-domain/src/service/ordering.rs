//! Sort orders for the fleet listing

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use twms_types::InputError;

use crate::model::TruckRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    WeightAscending,
    WeightDescending,
    Driver,
    Timestamp,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::WeightAscending,
        SortOrder::WeightDescending,
        SortOrder::Driver,
        SortOrder::Timestamp,
    ];

    pub fn compare(self, a: &TruckRecord, b: &TruckRecord) -> Ordering {
        match self {
            SortOrder::WeightAscending => a.total_weight().cmp(&b.total_weight()),
            SortOrder::WeightDescending => b.total_weight().cmp(&a.total_weight()),
            SortOrder::Driver => a.driver_name.cmp(&b.driver_name),
            SortOrder::Timestamp => a.created_at().cmp(&b.created_at()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::WeightAscending => "Weight (Asc)",
            SortOrder::WeightDescending => "Weight (Desc)",
            SortOrder::Driver => "Driver",
            SortOrder::Timestamp => "Timestamp",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SortOrder::WeightAscending => "weight-asc",
            SortOrder::WeightDescending => "weight-desc",
            SortOrder::Driver => "driver",
            SortOrder::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|order| order.key() == wanted)
            .ok_or_else(|| InputError::UnknownSortOrder(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CargoItem, TIMESTAMP_FORMAT};
    use crate::WeightModel;
    use chrono::NaiveDateTime;

    fn record(driver: &str, weight: u32, at: &str) -> TruckRecord {
        let mut record = TruckRecord::new(driver, "P", "D", weight)
            .with_created_at(NaiveDateTime::parse_from_str(at, TIMESTAMP_FORMAT).unwrap())
            .with_cargo([CargoItem::new(0, "empty crate")]);
        WeightModel::default().recompute(&mut record);
        record
    }

    fn drivers(records: &[TruckRecord]) -> Vec<&str> {
        records.iter().map(|r| r.driver_name.as_str()).collect()
    }

    fn sample() -> Vec<TruckRecord> {
        vec![
            record("Zara", 1200, "2024-01-02 09:00:00"),
            record("Adil", 1900, "2024-01-03 09:00:00"),
            record("Maya", 700, "2024-01-01 09:00:00"),
        ]
    }

    #[test]
    fn test_weight_orders() {
        let mut trucks = sample();
        trucks.sort_by(|a, b| SortOrder::WeightAscending.compare(a, b));
        assert_eq!(drivers(&trucks), ["Maya", "Zara", "Adil"]);
        trucks.sort_by(|a, b| SortOrder::WeightDescending.compare(a, b));
        assert_eq!(drivers(&trucks), ["Adil", "Zara", "Maya"]);
    }

    #[test]
    fn test_driver_and_timestamp_orders() {
        let mut trucks = sample();
        trucks.sort_by(|a, b| SortOrder::Driver.compare(a, b));
        assert_eq!(drivers(&trucks), ["Adil", "Maya", "Zara"]);
        trucks.sort_by(|a, b| SortOrder::Timestamp.compare(a, b));
        assert_eq!(drivers(&trucks), ["Maya", "Zara", "Adil"]);
    }

    #[test]
    fn test_driver_order_is_byte_wise() {
        let mut trucks = vec![record("bob", 0, "2024-01-01 00:00:00"), record("Carl", 0, "2024-01-01 00:00:00")];
        trucks.sort_by(|a, b| SortOrder::Driver.compare(a, b));
        assert_eq!(drivers(&trucks), ["Carl", "bob"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("weight-asc".parse::<SortOrder>().unwrap(), SortOrder::WeightAscending);
        assert_eq!("WEIGHT_DESC".parse::<SortOrder>().unwrap(), SortOrder::WeightDescending);
        assert_eq!("timestamp".parse::<SortOrder>().unwrap(), SortOrder::Timestamp);
        assert!("size".parse::<SortOrder>().is_err());
    }
}
