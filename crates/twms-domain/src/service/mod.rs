//! Domain services

pub mod ordering;
pub mod search;
pub mod statistics;
pub mod weight_model;

pub use ordering::SortOrder;
pub use search::{filter_by_status, search, SearchField};
pub use statistics::FleetStatistics;
pub use weight_model::{WeightAssessment, WeightModel, WEIGHT_LIMIT_KG};
