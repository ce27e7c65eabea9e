//! Aggregate figures over a set of trucks

use serde::Serialize;

use crate::model::{LifecycleStatus, TruckRecord};
use crate::service::WeightModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetStatistics {
    pub total_trucks: usize,
    pub ready_trucks: usize,
    pub near_limit_trucks: usize,
    pub overloaded_trucks: usize,
    pub total_weight: u64,
    pub average_weight: f64,
    pub max_weight: u64,
    pub min_weight: u64,
    pub average_load_percentage: f64,
}

impl FleetStatistics {
    /// `None` when there are no trucks
    ///
    /// Status counts follow the current status, so an overloaded truck that is
    /// already In Transit is not counted as Overloaded.
    pub fn compute<'a, I>(records: I, model: &WeightModel) -> Option<Self>
    where
        I: IntoIterator<Item = &'a TruckRecord>,
    {
        let mut stats = FleetStatistics {
            total_trucks: 0,
            ready_trucks: 0,
            near_limit_trucks: 0,
            overloaded_trucks: 0,
            total_weight: 0,
            average_weight: 0.0,
            max_weight: 0,
            min_weight: u64::MAX,
            average_load_percentage: 0.0,
        };

        for record in records {
            stats.total_trucks += 1;
            stats.total_weight += record.total_weight();
            stats.max_weight = stats.max_weight.max(record.total_weight());
            stats.min_weight = stats.min_weight.min(record.total_weight());
            stats.average_load_percentage += model.load_percentage(record);
            match record.status() {
                LifecycleStatus::Ready => stats.ready_trucks += 1,
                LifecycleStatus::NearLimit => stats.near_limit_trucks += 1,
                LifecycleStatus::Overloaded => stats.overloaded_trucks += 1,
                _ => {}
            }
        }

        if stats.total_trucks == 0 {
            return None;
        }

        stats.average_weight = stats.total_weight as f64 / stats.total_trucks as f64;
        stats.average_load_percentage /= stats.total_trucks as f64;
        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CargoItem, OperatorStatus};

    fn recomputed(empty_weight: u32, cargo: u32) -> TruckRecord {
        let mut record = TruckRecord::new("Driver", "PLATE", "Depot", empty_weight)
            .with_cargo([CargoItem::new(cargo, "load")]);
        WeightModel::default().recompute(&mut record);
        record
    }

    #[test]
    fn test_empty_fleet_has_no_statistics() {
        let trucks: Vec<TruckRecord> = Vec::new();
        assert!(FleetStatistics::compute(&trucks, &WeightModel::default()).is_none());
    }

    #[test]
    fn test_counts_and_averages() {
        let trucks = vec![
            recomputed(500, 500),   // 1000 Ready
            recomputed(1500, 400),  // 1900 Near Limit
            recomputed(2000, 200),  // 2200 Overloaded
            recomputed(400, 500),   // 900 Ready
        ];
        let stats = FleetStatistics::compute(&trucks, &WeightModel::default()).unwrap();
        assert_eq!(stats.total_trucks, 4);
        assert_eq!(stats.ready_trucks, 2);
        assert_eq!(stats.near_limit_trucks, 1);
        assert_eq!(stats.overloaded_trucks, 1);
        assert_eq!(stats.total_weight, 6000);
        assert!((stats.average_weight - 1500.0).abs() < 1e-9);
        assert_eq!(stats.max_weight, 2200);
        assert_eq!(stats.min_weight, 900);
        assert!((stats.average_load_percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_operator_held_trucks_not_counted_by_weight_class() {
        let mut truck = recomputed(2000, 500);
        truck.set_operator_status(OperatorStatus::InTransit);
        let trucks = vec![truck];
        let stats = FleetStatistics::compute(&trucks, &WeightModel::default()).unwrap();
        assert_eq!(stats.overloaded_trucks, 0);
        assert_eq!(stats.max_weight, 2500);
        assert_eq!(stats.min_weight, 2500);
    }
}
