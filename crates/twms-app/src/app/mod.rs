//! Use cases of the weight management system

mod fleet_service;
mod registration;

pub use fleet_service::FleetService;
pub use registration::{parse_cargo_arg, validate_range, validate_text, TruckDraft};
