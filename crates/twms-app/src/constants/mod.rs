//! Input limits enforced at the operator boundary

/// Trucks that can be registered in one batch
pub const MAX_TRUCKS_PER_BATCH: u32 = 100;

/// Upper bound for the empty (tare) weight of a truck, kg
pub const MAX_EMPTY_WEIGHT_KG: u32 = 10_000;

pub const MAX_BOXES_PER_TRUCK: u32 = 1000;

/// Upper bound for a single box, kg
pub const MAX_BOX_WEIGHT_KG: u32 = 5000;

/// Largest id accepted by id prompts
pub const MAX_TRUCK_ID: u32 = 9999;
