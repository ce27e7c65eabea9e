//! Truck record type definitions

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use uuid::Uuid;

use super::{CargoItem, LifecycleStatus, OperatorStatus};

/// Format of `created_at` on screen and in every file the system writes
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stable in-session identity of a record.
///
/// The displayed `id` is a positional label that changes on delete and sort;
/// the key does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruckKey(Uuid);

impl TruckKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TruckKey {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered truck and its cargo
///
/// `total_weight`, `overloaded`, and derived statuses are owned by
/// [`crate::WeightModel::recompute`]; nothing else writes them.
#[derive(Debug, Clone, Serialize)]
pub struct TruckRecord {
    #[serde(skip)]
    key: TruckKey,
    id: u32,
    pub driver_name: String,
    pub license_plate: String,
    pub destination: String,
    empty_weight: u32,
    cargo: Vec<CargoItem>,
    created_at: NaiveDateTime,
    total_weight: u64,
    overloaded: bool,
    status: LifecycleStatus,
}

impl TruckRecord {
    /// New record with empty cargo, status Pending, stamped with the current local time
    pub fn new(
        driver_name: impl Into<String>,
        license_plate: impl Into<String>,
        destination: impl Into<String>,
        empty_weight: u32,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            key: TruckKey::new(),
            id: 0,
            driver_name: driver_name.into(),
            license_plate: license_plate.into(),
            destination: destination.into(),
            empty_weight,
            cargo: Vec::new(),
            created_at: now.with_nanosecond(0).unwrap_or(now),
            total_weight: 0,
            overloaded: false,
            status: LifecycleStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Restore a persisted status. Derived statuses are re-derived on the next recompute.
    pub fn with_status(mut self, status: LifecycleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_cargo(mut self, cargo: impl IntoIterator<Item = CargoItem>) -> Self {
        self.cargo.extend(cargo);
        self
    }

    pub fn key(&self) -> TruckKey {
        self.key
    }

    /// 1-based position in the fleet
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn empty_weight(&self) -> u32 {
        self.empty_weight
    }

    /// Derived fields go stale until the next recompute
    pub fn set_empty_weight(&mut self, empty_weight: u32) {
        self.empty_weight = empty_weight;
    }

    pub fn cargo(&self) -> &[CargoItem] {
        &self.cargo
    }

    /// Derived fields go stale until the next recompute
    pub fn add_cargo(&mut self, item: CargoItem) {
        self.cargo.push(item);
    }

    pub fn cargo_weight(&self) -> u64 {
        self.cargo.iter().map(|item| u64::from(item.weight())).sum()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn is_overloaded(&self) -> bool {
        self.overloaded
    }

    pub fn status(&self) -> LifecycleStatus {
        self.status
    }

    /// Operator action; bypasses weight-based classification
    pub fn set_operator_status(&mut self, status: OperatorStatus) {
        self.status = status.into();
    }

    pub(crate) fn set_weight_figures(&mut self, total_weight: u64, overloaded: bool) {
        self.total_weight = total_weight;
        self.overloaded = overloaded;
    }

    pub(crate) fn set_derived_status(&mut self, status: LifecycleStatus) {
        debug_assert!(!status.is_operator_held());
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_pending_and_empty() {
        let truck = TruckRecord::new("Ali", "ABC-123", "Lahore", 1500);
        assert_eq!(truck.status(), LifecycleStatus::Pending);
        assert!(truck.cargo().is_empty());
        assert_eq!(truck.total_weight(), 0);
        assert!(!truck.is_overloaded());
        assert_eq!(truck.created_at().nanosecond(), 0);
    }

    #[test]
    fn test_keys_are_unique() {
        let a = TruckRecord::new("A", "P1", "X", 0);
        let b = TruckRecord::new("A", "P1", "X", 0);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_cargo_weight_sums_items() {
        let truck = TruckRecord::new("Ali", "ABC-123", "Lahore", 1500)
            .with_cargo([CargoItem::new(300, "Rice"), CargoItem::new(150, "Tea")]);
        assert_eq!(truck.cargo_weight(), 450);
        assert_eq!(truck.cargo()[1].description(), "Tea");
    }

    #[test]
    fn test_timestamp_format() {
        let at = NaiveDateTime::parse_from_str("2024-03-01 08:15:30", TIMESTAMP_FORMAT).unwrap();
        let truck = TruckRecord::new("Ali", "ABC-123", "Lahore", 0).with_created_at(at);
        assert_eq!(truck.timestamp(), "2024-03-01 08:15:30");
    }

    #[test]
    fn test_operator_status_overrides() {
        let mut truck = TruckRecord::new("Ali", "ABC-123", "Lahore", 0);
        truck.set_operator_status(OperatorStatus::InTransit);
        assert_eq!(truck.status(), LifecycleStatus::InTransit);
    }
}
