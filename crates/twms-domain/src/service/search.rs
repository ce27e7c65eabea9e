//! Free-text search over truck records

use crate::model::{LifecycleStatus, TruckRecord};

/// Text field a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Driver,
    Plate,
    Destination,
}

impl SearchField {
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Driver => "driver name",
            SearchField::Plate => "license plate",
            SearchField::Destination => "destination",
        }
    }

    fn value(self, record: &TruckRecord) -> &str {
        match self {
            SearchField::Driver => &record.driver_name,
            SearchField::Plate => &record.license_plate,
            SearchField::Destination => &record.destination,
        }
    }
}

/// Case-insensitive substring match
pub fn matches(record: &TruckRecord, field: SearchField, term: &str) -> bool {
    field
        .value(record)
        .to_uppercase()
        .contains(&term.to_uppercase())
}

pub fn search<'a, I>(records: I, field: SearchField, term: &str) -> Vec<&'a TruckRecord>
where
    I: IntoIterator<Item = &'a TruckRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(record, field, term))
        .collect()
}

pub fn filter_by_status<'a, I>(records: I, status: LifecycleStatus) -> Vec<&'a TruckRecord>
where
    I: IntoIterator<Item = &'a TruckRecord>,
{
    records
        .into_iter()
        .filter(|record| record.status() == status)
        .collect()
}
