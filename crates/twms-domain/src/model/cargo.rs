use serde::{Deserialize, Serialize};

/// A single weighed unit loaded onto a truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoItem {
    weight: u32,
    description: String,
}

impl CargoItem {
    pub fn new(weight: u32, description: impl Into<String>) -> Self {
        Self {
            weight,
            description: description.into(),
        }
    }

    /// Weight in kilograms
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
