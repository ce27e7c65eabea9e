//! Output formatting module

use serde::Serialize;
use twms_domain::service::{FleetStatistics, SearchField, WeightAssessment};
use twms_domain::{TruckRecord, WeightModel};
use twms_types::{OutputFormat, Result};

const TABLE_WIDTH: usize = 114;
const PANEL_WIDTH: usize = 68;

/// Record plus the figures shown alongside it
#[derive(Serialize)]
struct TruckView<'a> {
    #[serde(flatten)]
    truck: &'a TruckRecord,
    #[serde(flatten)]
    assessment: WeightAssessment,
}

fn view<'a>(truck: &'a TruckRecord, model: &WeightModel) -> TruckView<'a> {
    TruckView {
        truck,
        assessment: model.assess(truck),
    }
}

/// Keep `keep` characters plus "..." when `s` is longer than `max_len`
pub fn truncate(s: &str, max_len: usize, keep: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(keep).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

pub fn truck_table(trucks: &[&TruckRecord], model: &WeightModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    out.push_str(&format!(
        "{:<6}{:<20}{:<15}{:<18}{:<10}{:<10}{:<15}{:<20}\n",
        "ID", "Driver", "License", "Destination", "Weight", "Load %", "Status", "Timestamp"
    ));
    out.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

    for truck in trucks {
        out.push_str(&format!(
            "{:<6}{:<20}{:<15}{:<18}{:<10}{:<10.1}{:<15}{:<20}\n",
            truck.id(),
            truncate(&truck.driver_name, 18, 15),
            truck.license_plate,
            truncate(&truck.destination, 16, 13),
            truck.total_weight(),
            model.load_percentage(truck),
            truck.status().label(),
            truck.timestamp()
        ));
    }

    out.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    out.push_str(&format!("Total Trucks: {}\n", trucks.len()));
    out
}

pub fn truck_details(truck: &TruckRecord, model: &WeightModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nTRUCK #{}\n", truck.id()));
    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  Driver Name    : {}\n", truck.driver_name));
    out.push_str(&format!("  License Plate  : {}\n", truck.license_plate));
    out.push_str(&format!("  Destination    : {}\n", truck.destination));
    out.push_str(&format!("  Added On       : {}\n", truck.timestamp()));
    out.push_str(&format!("  Status         : {}\n", truck.status()));
    out.push_str(&format!("  Empty Weight   : {} kg\n", truck.empty_weight()));
    out.push_str(&format!("  Number of Boxes: {}\n", truck.cargo().len()));

    if !truck.cargo().is_empty() {
        out.push_str("\n  Box Details:\n");
        out.push_str(&format!("  {}\n", "-".repeat(PANEL_WIDTH - 2)));
        out.push_str(&format!("  {:<8}{:<15}{}\n", "Box #", "Weight (kg)", "Description"));
        out.push_str(&format!("  {}\n", "-".repeat(PANEL_WIDTH - 2)));
        for (index, item) in truck.cargo().iter().enumerate() {
            let description: String = item.description().chars().take(41).collect();
            out.push_str(&format!("  {:<8}{:<15}{}\n", index + 1, item.weight(), description));
        }
        out.push_str(&format!("  {}\n", "-".repeat(PANEL_WIDTH - 2)));
        out.push_str(&format!("  Total Cargo Weight: {} kg\n", truck.cargo_weight()));
    }

    out.push_str("\nWEIGHT ANALYSIS\n");
    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  Total Weight      : {} kg\n", truck.total_weight()));
    out.push_str(&format!("  Maximum Allowed   : {} kg\n", model.limit_kg()));
    out.push_str(&format!("  Load Percentage   : {}%\n", model.load_percentage(truck) as u64));
    match model.overage(truck) {
        Some(over) => out.push_str(&format!("  OVERWEIGHT BY     : {} kg\n", over)),
        None => out.push_str(&format!(
            "  Available Space   : {} kg\n",
            model.remaining_capacity(truck)
        )),
    }
    out
}

/// Shown right after a truck is registered
pub fn registration_summary(truck: &TruckRecord, model: &WeightModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  TRUCK SUMMARY (#{})\n", truck.id()));
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  Driver: {}\n", truck.driver_name));
    out.push_str(&format!("  License: {}\n", truck.license_plate));
    out.push_str(&format!("  Destination: {}\n", truck.destination));
    out.push_str(&format!("  Total Weight: {} kg\n", truck.total_weight()));
    out.push_str(&format!("  Load Percentage: {:.1}%\n", model.load_percentage(truck)));
    out.push_str(&format!("  Status: {}\n", truck.status()));
    match model.overage(truck) {
        Some(over) => out.push_str(&format!("  WARNING: OVERLOADED BY {} kg\n", over)),
        None => out.push_str(&format!(
            "  Remaining Capacity: {} kg\n",
            model.remaining_capacity(truck)
        )),
    }
    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out
}

pub fn search_results(trucks: &[&TruckRecord], field: SearchField) -> String {
    let mut out = String::new();

    out.push_str("\nSearch Results:\n");
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    for truck in trucks {
        let line = match field {
            SearchField::Driver => format!(
                "ID: {} | Driver: {} | Plate: {} | Status: {}",
                truck.id(),
                truck.driver_name,
                truck.license_plate,
                truck.status()
            ),
            SearchField::Plate => format!(
                "ID: {} | Driver: {} | Plate: {} | Dest: {}",
                truck.id(),
                truck.driver_name,
                truck.license_plate,
                truck.destination
            ),
            SearchField::Destination => format!(
                "ID: {} | Dest: {} | Weight: {}kg",
                truck.id(),
                truck.destination,
                truck.total_weight()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    if trucks.is_empty() {
        out.push_str("No matches found.\n");
    }
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    out
}

pub fn status_results(trucks: &[&TruckRecord], status: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nTrucks with status '{}':\n", status));
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    for truck in trucks {
        out.push_str(&format!(
            "ID: {} | Driver: {} | Weight: {} kg\n",
            truck.id(),
            truck.driver_name,
            truck.total_weight()
        ));
    }
    if trucks.is_empty() {
        out.push_str("No trucks with this status.\n");
    }
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    out
}

pub fn statistics_summary(stats: &FleetStatistics) -> String {
    let mut out = String::new();

    out.push_str("\nSTATISTICAL ANALYSIS\n");
    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  Total Trucks           : {}\n", stats.total_trucks));
    out.push_str(&format!("  Ready for Dispatch     : {}\n", stats.ready_trucks));
    out.push_str(&format!("  Near Limit             : {}\n", stats.near_limit_trucks));
    out.push_str(&format!("  Overloaded             : {}\n", stats.overloaded_trucks));
    out.push_str(&format!("{}\n", "-".repeat(PANEL_WIDTH)));
    out.push_str(&format!("  Total Weight           : {} kg\n", stats.total_weight));
    out.push_str(&format!("  Average Weight         : {} kg\n", stats.average_weight as u64));
    out.push_str(&format!("  Maximum Weight         : {} kg\n", stats.max_weight));
    out.push_str(&format!("  Minimum Weight         : {} kg\n", stats.min_weight));
    out.push_str(&format!(
        "  Avg Load Percentage    : {}%\n",
        stats.average_load_percentage as u64
    ));
    out.push_str(&format!("{}\n", "=".repeat(PANEL_WIDTH)));
    out
}

pub fn output_trucks(output_format: OutputFormat, trucks: &[&TruckRecord], model: &WeightModel) -> Result<()> {
    if output_format == OutputFormat::Json {
        let views: Vec<_> = trucks.iter().map(|truck| view(truck, model)).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if trucks.is_empty() {
        println!("No trucks in the system.");
    } else {
        print!("{}", truck_table(trucks, model));
    }
    Ok(())
}

pub fn output_truck(output_format: OutputFormat, truck: &TruckRecord, model: &WeightModel) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view(truck, model))?);
    } else {
        print!("{}", truck_details(truck, model));
    }
    Ok(())
}

pub fn output_registered(output_format: OutputFormat, truck: &TruckRecord, model: &WeightModel) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view(truck, model))?);
    } else {
        print!("{}", registration_summary(truck, model));
    }
    Ok(())
}

pub fn output_statistics(output_format: OutputFormat, stats: &FleetStatistics) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        print!("{}", statistics_summary(stats));
    }
    Ok(())
}
