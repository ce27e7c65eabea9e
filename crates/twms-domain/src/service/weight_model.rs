//! Weight aggregation and status classification

use serde::{Deserialize, Serialize};

use crate::model::{LifecycleStatus, StatusCategory, TruckRecord};

/// Maximum permissible total truck weight in kilograms
pub const WEIGHT_LIMIT_KG: u32 = 2000;

/// A load at or above this share of the limit (in percent) is "Near Limit"
const NEAR_LIMIT_PERCENT: u64 = 90;

/// Derives total weight, overload flag, and weight status of a truck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightModel {
    limit_kg: u32,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self::new(WEIGHT_LIMIT_KG)
    }
}

/// Figures measured against the limit, shown alongside a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAssessment {
    pub limit_kg: u32,
    pub load_percentage: f64,
    pub remaining_capacity: i64,
    pub overage: Option<u64>,
}

impl WeightModel {
    pub fn new(limit_kg: u32) -> Self {
        Self { limit_kg }
    }

    pub fn limit_kg(&self) -> u32 {
        self.limit_kg
    }

    /// Weight class for a total, ignoring any operator-held status
    pub fn classify(&self, total_weight: u64) -> LifecycleStatus {
        let limit = u64::from(self.limit_kg);
        if total_weight > limit {
            LifecycleStatus::Overloaded
        } else if total_weight * 100 >= limit * NEAR_LIMIT_PERCENT {
            LifecycleStatus::NearLimit
        } else {
            LifecycleStatus::Ready
        }
    }

    /// Refresh the derived fields of `record` from its empty weight and cargo.
    ///
    /// Operator-held statuses (In Transit, Delivered, Cancelled) are kept;
    /// the weight figures are refreshed regardless.
    pub fn recompute(&self, record: &mut TruckRecord) {
        let total_weight = u64::from(record.empty_weight()) + record.cargo_weight();
        let overloaded = total_weight > u64::from(self.limit_kg);
        record.set_weight_figures(total_weight, overloaded);

        match record.status().category() {
            StatusCategory::Derived => record.set_derived_status(self.classify(total_weight)),
            StatusCategory::OperatorHeld => {}
        }
    }

    /// Total weight as a percentage of the limit; exceeds 100 when overloaded
    pub fn load_percentage(&self, record: &TruckRecord) -> f64 {
        record.total_weight() as f64 * 100.0 / f64::from(self.limit_kg)
    }

    /// Headroom below the limit; negative when overloaded
    pub fn remaining_capacity(&self, record: &TruckRecord) -> i64 {
        i64::from(self.limit_kg) - record.total_weight() as i64
    }

    /// Kilograms above the limit, if any
    pub fn overage(&self, record: &TruckRecord) -> Option<u64> {
        record
            .is_overloaded()
            .then(|| record.total_weight() - u64::from(self.limit_kg))
    }

    pub fn assess(&self, record: &TruckRecord) -> WeightAssessment {
        WeightAssessment {
            limit_kg: self.limit_kg,
            load_percentage: self.load_percentage(record),
            remaining_capacity: self.remaining_capacity(record),
            overage: self.overage(record),
        }
    }
}
