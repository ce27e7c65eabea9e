//! Truck weight domain: records, lifecycle statuses, and the weight model

pub mod model;
pub mod repository;
pub mod service;

pub use model::{CargoItem, LifecycleStatus, OperatorStatus, StatusCategory, TruckKey, TruckRecord};
pub use service::{WeightModel, WEIGHT_LIMIT_KG};
