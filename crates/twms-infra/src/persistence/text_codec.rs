//! Line-oriented encoding of the primary data file
//!
//! One value per line. Each truck is written as
//!
//! ```text
//! id
//! driver name
//! license plate
//! destination
//! empty weight
//! status label
//! created at (%Y-%m-%d %H:%M:%S)
//! box count
//! box weight      } repeated
//! box description } box count times
//! ```
//!
//! Derived weight fields are not stored; callers recompute after decoding.

use std::str::{FromStr, Lines};

use chrono::NaiveDateTime;
use twms_domain::model::TIMESTAMP_FORMAT;
use twms_domain::{CargoItem, LifecycleStatus, TruckRecord};
use twms_types::StoreError;

pub fn encode(records: &[TruckRecord]) -> String {
    let mut out = String::new();
    for truck in records {
        out.push_str(&format!("{}\n", truck.id()));
        out.push_str(&format!("{}\n", truck.driver_name));
        out.push_str(&format!("{}\n", truck.license_plate));
        out.push_str(&format!("{}\n", truck.destination));
        out.push_str(&format!("{}\n", truck.empty_weight()));
        out.push_str(&format!("{}\n", truck.status().label()));
        out.push_str(&format!("{}\n", truck.timestamp()));
        out.push_str(&format!("{}\n", truck.cargo().len()));
        for item in truck.cargo() {
            out.push_str(&format!("{}\n", item.weight()));
            out.push_str(&format!("{}\n", item.description()));
        }
    }
    out
}

/// Decode records in file order. Weight figures are left for the caller to recompute.
pub fn decode(content: &str) -> Result<Vec<TruckRecord>, StoreError> {
    let mut reader = LineReader::new(content);
    let mut records = Vec::new();

    while reader.skip_blank_lines() {
        let id: u32 = reader.number("truck id")?;
        let driver_name = reader.text("driver name")?;
        let license_plate = reader.text("license plate")?;
        let destination = reader.text("destination")?;
        let empty_weight: u32 = reader.number("empty weight")?;
        let status = reader.status()?;
        let created_at = reader.timestamp()?;
        let box_count: usize = reader.number("box count")?;

        let mut cargo = Vec::with_capacity(box_count.min(1024));
        for _ in 0..box_count {
            let weight: u32 = reader.number("box weight")?;
            let description = reader.text("box description")?;
            cargo.push(CargoItem::new(weight, description));
        }

        records.push(
            TruckRecord::new(driver_name, license_plate, destination, empty_weight)
                .with_id(id)
                .with_status(status)
                .with_created_at(created_at)
                .with_cargo(cargo),
        );
    }

    Ok(records)
}

struct LineReader<'a> {
    lines: std::iter::Peekable<Lines<'a>>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().peekable(),
            line_no: 0,
        }
    }

    /// Skip blank lines between records; false at end of input
    fn skip_blank_lines(&mut self) -> bool {
        while let Some(line) = self.lines.peek() {
            if !line.trim().is_empty() {
                return true;
            }
            self.lines.next();
            self.line_no += 1;
        }
        false
    }

    fn text(&mut self, expected: &'static str) -> Result<String, StoreError> {
        self.line_no += 1;
        self.lines
            .next()
            .map(str::to_string)
            .ok_or(StoreError::Truncated {
                line: self.line_no,
                expected,
            })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, StoreError> {
        let value = self.text(expected)?;
        value.trim().parse().map_err(|_| StoreError::InvalidNumber {
            line: self.line_no,
            value,
        })
    }

    fn status(&mut self) -> Result<LifecycleStatus, StoreError> {
        let value = self.text("status")?;
        LifecycleStatus::from_label(value.trim()).ok_or(StoreError::InvalidStatus {
            line: self.line_no,
            value,
        })
    }

    fn timestamp(&mut self) -> Result<NaiveDateTime, StoreError> {
        let value = self.text("timestamp")?;
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
            StoreError::InvalidTimestamp {
                line: self.line_no,
                value,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twms_domain::{OperatorStatus, WeightModel};

    const SAMPLE: &str = "\
1
Ali Raza
LEA-1234
Karachi
1500
Near Limit
2024-05-01 10:30:00
2
300
Rice bags
150
Tea chests
2
Sana Malik
ISB-42
Lahore
800
Delivered
2024-05-02 07:00:05
0
";

    #[test]
    fn test_decode_sample() {
        let records = decode(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id(), 1);
        assert_eq!(first.driver_name, "Ali Raza");
        assert_eq!(first.license_plate, "LEA-1234");
        assert_eq!(first.destination, "Karachi");
        assert_eq!(first.empty_weight(), 1500);
        assert_eq!(first.status(), LifecycleStatus::NearLimit);
        assert_eq!(first.timestamp(), "2024-05-01 10:30:00");
        assert_eq!(first.cargo().len(), 2);
        assert_eq!(first.cargo()[1], CargoItem::new(150, "Tea chests"));

        assert_eq!(records[1].status(), LifecycleStatus::Delivered);
        assert!(records[1].cargo().is_empty());
    }

    #[test]
    fn test_decoded_records_need_recompute() {
        let mut records = decode(SAMPLE).unwrap();
        assert_eq!(records[0].total_weight(), 0);
        let model = WeightModel::default();
        for record in &mut records {
            model.recompute(record);
        }
        assert_eq!(records[0].total_weight(), 1950);
        assert_eq!(records[1].total_weight(), 800);
        assert_eq!(records[1].status(), LifecycleStatus::Delivered);
    }

    #[test]
    fn test_encode_matches_decode_input() {
        let records = decode(SAMPLE).unwrap();
        assert_eq!(encode(&records), SAMPLE);
    }

    #[test]
    fn test_encode_operator_status_label() {
        let mut record = TruckRecord::new("A", "B", "C", 10).with_id(1);
        record.set_operator_status(OperatorStatus::InTransit);
        let encoded = encode(&[record]);
        assert_eq!(encoded.lines().nth(5), Some("In Transit"));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_tolerates_crlf() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let records = decode(&crlf).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].driver_name, "Ali Raza");
    }

    #[test]
    fn test_truncated_record() {
        let err = decode("1\nAli\nLEA-1\n").unwrap_err();
        match err {
            StoreError::Truncated { line, expected } => {
                assert_eq!(line, 4);
                assert_eq!(expected, "destination");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let broken = SAMPLE.replacen("1500", "heavy", 1);
        match decode(&broken).unwrap_err() {
            StoreError::InvalidNumber { line, value } => {
                assert_eq!(line, 5);
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status() {
        let broken = SAMPLE.replacen("Near Limit", "Lost", 1);
        assert!(matches!(
            decode(&broken),
            Err(StoreError::InvalidStatus { line: 6, .. })
        ));
    }

    #[test]
    fn test_bad_timestamp() {
        let broken = SAMPLE.replacen("2024-05-01 10:30:00", "yesterday", 1);
        assert!(matches!(
            decode(&broken),
            Err(StoreError::InvalidTimestamp { line: 7, .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let broken = SAMPLE.replacen("300", "-300", 1);
        assert!(matches!(
            decode(&broken),
            Err(StoreError::InvalidNumber { line: 9, .. })
        ));
    }
}
