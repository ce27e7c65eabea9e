//! Domain model types

pub mod cargo;
pub mod status;
pub mod truck;

pub use cargo::CargoItem;
pub use status::{LifecycleStatus, OperatorStatus, StatusCategory};
pub use truck::{TruckKey, TruckRecord, TIMESTAMP_FORMAT};
