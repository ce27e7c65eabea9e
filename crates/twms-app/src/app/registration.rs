//! Operator-entered truck data and its validation

use twms_domain::{CargoItem, TruckRecord};
use twms_types::InputError;

use crate::constants::{MAX_BOXES_PER_TRUCK, MAX_BOX_WEIGHT_KG, MAX_EMPTY_WEIGHT_KG};

/// A truck as entered by the operator, before it joins the fleet
#[derive(Debug, Clone, Default)]
pub struct TruckDraft {
    pub driver_name: String,
    pub license_plate: String,
    pub destination: String,
    pub empty_weight: u32,
    pub cargo: Vec<CargoItem>,
}

impl TruckDraft {
    pub fn new(
        driver_name: impl Into<String>,
        license_plate: impl Into<String>,
        destination: impl Into<String>,
        empty_weight: u32,
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            license_plate: license_plate.into(),
            destination: destination.into(),
            empty_weight,
            cargo: Vec::new(),
        }
    }

    pub fn with_cargo(mut self, cargo: impl IntoIterator<Item = CargoItem>) -> Self {
        self.cargo.extend(cargo);
        self
    }

    /// Check every field against the registration limits
    pub fn validate(&self) -> Result<(), InputError> {
        validate_text("Driver name", &self.driver_name)?;
        validate_text("License plate", &self.license_plate)?;
        validate_text("Destination", &self.destination)?;
        validate_range("Empty truck weight", i64::from(self.empty_weight), 0, i64::from(MAX_EMPTY_WEIGHT_KG))?;
        validate_range(
            "Number of boxes",
            i64::try_from(self.cargo.len()).unwrap_or(i64::MAX),
            0,
            i64::from(MAX_BOXES_PER_TRUCK),
        )?;
        for item in &self.cargo {
            validate_range("Box weight", i64::from(item.weight()), 0, i64::from(MAX_BOX_WEIGHT_KG))?;
            validate_text("Box description", item.description())?;
        }
        Ok(())
    }

    /// Unvalidated conversion; the caller recomputes the derived fields
    pub(crate) fn into_record(self) -> TruckRecord {
        TruckRecord::new(
            self.driver_name,
            self.license_plate,
            self.destination,
            self.empty_weight,
        )
        .with_cargo(self.cargo)
    }
}

/// Free text must be non-empty and must not break the one-value-per-line store
pub fn validate_text(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::Empty { field });
    }
    if value.contains(['\n', '\r']) {
        return Err(InputError::MultiLine { field });
    }
    Ok(())
}

pub fn validate_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64, InputError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { field, min, max, value })
    }
}

/// Parse `WEIGHT:DESCRIPTION`, e.g. `300:Rice`
pub fn parse_cargo_arg(arg: &str) -> Result<CargoItem, InputError> {
    let invalid = || InputError::InvalidCargo(arg.to_string());

    let (weight, description) = arg.split_once(':').ok_or_else(invalid)?;
    let weight: u32 = weight.trim().parse().map_err(|_| invalid())?;
    validate_range("Box weight", i64::from(weight), 0, i64::from(MAX_BOX_WEIGHT_KG))?;

    let description = description.trim();
    validate_text("Box description", description)?;
    Ok(CargoItem::new(weight, description))
}
