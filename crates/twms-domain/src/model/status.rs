//! Lifecycle status of a truck
//!
//! Statuses fall into two categories. Derived statuses are recomputed from the
//! truck's weight whenever its cargo changes. Operator-held statuses are only
//! ever entered by an explicit operator action and are left alone by
//! recomputation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use twms_types::InputError;

/// Who owns a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Pending (initial) and the three weight classes
    Derived,
    /// In Transit, Delivered, Cancelled
    OperatorHeld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LifecycleStatus {
    Pending,
    Ready,
    NearLimit,
    Overloaded,
    InTransit,
    Delivered,
    Cancelled,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 7] = [
        LifecycleStatus::Pending,
        LifecycleStatus::Ready,
        LifecycleStatus::NearLimit,
        LifecycleStatus::Overloaded,
        LifecycleStatus::InTransit,
        LifecycleStatus::Delivered,
        LifecycleStatus::Cancelled,
    ];

    pub fn category(self) -> StatusCategory {
        match self {
            LifecycleStatus::Pending
            | LifecycleStatus::Ready
            | LifecycleStatus::NearLimit
            | LifecycleStatus::Overloaded => StatusCategory::Derived,
            LifecycleStatus::InTransit | LifecycleStatus::Delivered | LifecycleStatus::Cancelled => {
                StatusCategory::OperatorHeld
            }
        }
    }

    pub fn is_operator_held(self) -> bool {
        self.category() == StatusCategory::OperatorHeld
    }

    /// Display label, also used verbatim in the data file
    pub fn label(self) -> &'static str {
        match self {
            LifecycleStatus::Pending => "Pending",
            LifecycleStatus::Ready => "Ready",
            LifecycleStatus::NearLimit => "Near Limit",
            LifecycleStatus::Overloaded => "Overloaded",
            LifecycleStatus::InTransit => "In Transit",
            LifecycleStatus::Delivered => "Delivered",
            LifecycleStatus::Cancelled => "Cancelled",
        }
    }

    /// Exact label match, as written by [`LifecycleStatus::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parse: case, spaces, '-' and '_' are ignored ("near-limit", "IN TRANSIT")
impl FromStr for LifecycleStatus {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|status| normalize(status.label()) == wanted)
            .ok_or_else(|| InputError::UnknownStatus(s.to_string()))
    }
}

impl From<LifecycleStatus> for String {
    fn from(status: LifecycleStatus) -> Self {
        status.label().to_string()
    }
}

impl TryFrom<String> for LifecycleStatus {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Statuses an operator may assign directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl OperatorStatus {
    pub const ALL: [OperatorStatus; 4] = [
        OperatorStatus::Pending,
        OperatorStatus::InTransit,
        OperatorStatus::Delivered,
        OperatorStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        LifecycleStatus::from(self).label()
    }
}

impl From<OperatorStatus> for LifecycleStatus {
    fn from(status: OperatorStatus) -> Self {
        match status {
            OperatorStatus::Pending => LifecycleStatus::Pending,
            OperatorStatus::InTransit => LifecycleStatus::InTransit,
            OperatorStatus::Delivered => LifecycleStatus::Delivered,
            OperatorStatus::Cancelled => LifecycleStatus::Cancelled,
        }
    }
}

impl fmt::Display for OperatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperatorStatus {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status: LifecycleStatus = s.parse()?;
        Self::ALL
            .into_iter()
            .find(|op| LifecycleStatus::from(*op) == status)
            .ok_or_else(|| InputError::UnknownStatus(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(LifecycleStatus::Pending.category(), StatusCategory::Derived);
        assert_eq!(LifecycleStatus::NearLimit.category(), StatusCategory::Derived);
        assert!(LifecycleStatus::InTransit.is_operator_held());
        assert!(LifecycleStatus::Delivered.is_operator_held());
        assert!(LifecycleStatus::Cancelled.is_operator_held());
        assert!(!LifecycleStatus::Overloaded.is_operator_held());
    }

    #[test]
    fn test_label_lookup_is_exact() {
        assert_eq!(LifecycleStatus::from_label("Near Limit"), Some(LifecycleStatus::NearLimit));
        assert_eq!(LifecycleStatus::from_label("near limit"), None);
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!("near-limit".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::NearLimit);
        assert_eq!("IN TRANSIT".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::InTransit);
        assert_eq!("in_transit".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::InTransit);
        assert!("lost".parse::<LifecycleStatus>().is_err());
    }

    #[test]
    fn test_operator_status_rejects_derived_statuses() {
        assert_eq!("delivered".parse::<OperatorStatus>().unwrap(), OperatorStatus::Delivered);
        assert_eq!(
            "overloaded".parse::<OperatorStatus>(),
            Err(InputError::UnknownStatus("overloaded".to_string()))
        );
        assert!("ready".parse::<OperatorStatus>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&LifecycleStatus::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
        let back: LifecycleStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LifecycleStatus::InTransit);
    }
}
