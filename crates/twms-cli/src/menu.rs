//! Interactive menu session

use std::io::{BufRead, Write};

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use twms_app::app::{FleetService, TruckDraft};
use twms_app::config::Config;
use twms_app::constants::{
    MAX_BOXES_PER_TRUCK, MAX_BOX_WEIGHT_KG, MAX_EMPTY_WEIGHT_KG, MAX_TRUCKS_PER_BATCH,
    MAX_TRUCK_ID,
};
use twms_domain::service::{SearchField, SortOrder};
use twms_domain::{CargoItem, LifecycleStatus, OperatorStatus};
use twms_types::{Error, Result};

use crate::output;
use crate::prompt::Prompter;

const MAIN_MENU: &str = "
MAIN MENU
====================================================================
  1.  Add New Trucks
  2.  View All Trucks (Summary)
  3.  View Detailed Truck Information
  4.  Search Trucks
  5.  Update Truck Status
  6.  Delete Truck
  7.  Sort Trucks
  8.  Generate Statistics
  9.  Generate Report (Text File)
  10. Export to CSV
  11. Save Data
  12. Exit System
====================================================================
";

const SEARCH_MENU: &str = "
SEARCH OPTIONS
====================================================================
  1. Search by Driver Name
  2. Search by License Plate
  3. Search by Destination
  4. Filter by Status
  5. Back to Main Menu
====================================================================
";

enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    service: FleetService,
    config: &'a Config,
    prompter: Prompter<R, W>,
    show_progress: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(service: FleetService, config: &'a Config, input: R, output: W) -> Self {
        Self {
            service,
            config,
            prompter: Prompter::new(input, output),
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while boxes are entered
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run until the operator exits or input ends. Unsaved changes are
    /// dropped when input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.out(),
            "TRUCK WEIGHT MANAGEMENT SYSTEM\nCurrent Session: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        loop {
            let step = self
                .prompter
                .read_int(&format!("{}Enter your choice: ", MAIN_MENU), 1, 12)
                .and_then(|choice| self.dispatch(choice));

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(Error::InputClosed) => {
                    if self.service.is_modified() {
                        log::warn!("input closed with unsaved changes; they were not saved");
                    }
                    writeln!(self.out(), "\nInput closed. Session ended.")?;
                    return Ok(());
                }
                Err(e) => writeln!(self.out(), "\n  ! {}", e)?,
            }
        }
    }

    fn dispatch(&mut self, choice: i64) -> Result<Flow> {
        match choice {
            1 => self.add_trucks()?,
            2 => self.view_all()?,
            3 => self.view_details()?,
            4 => self.search()?,
            5 => self.update_status()?,
            6 => self.delete_truck()?,
            7 => self.sort_trucks()?,
            8 => self.statistics()?,
            9 => self.report()?,
            10 => self.export_csv()?,
            11 => self.save()?,
            _ => return self.exit(),
        }
        Ok(Flow::Continue)
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn add_trucks(&mut self) -> Result<()> {
        writeln!(self.out(), "\nADD NEW TRUCKS")?;
        let count = self.read_bounded("Enter number of trucks to add: ", 1, MAX_TRUCKS_PER_BATCH)?;

        for _ in 0..count {
            let next_id = self.service.fleet().next_id();
            writeln!(self.out(), "\n{}", "-".repeat(68))?;
            writeln!(self.out(), "  TRUCK #{} - Registration", next_id)?;
            writeln!(self.out(), "{}", "-".repeat(68))?;

            let driver = self.prompter.read_text("Driver Name: ")?;
            let plate = self.prompter.read_text("License Plate: ")?;
            let destination = self.prompter.read_text("Destination: ")?;
            let empty_weight =
                self.read_bounded("Empty Truck Weight (kg): ", 0, MAX_EMPTY_WEIGHT_KG)?;
            let box_count = self.read_bounded("Number of Boxes: ", 0, MAX_BOXES_PER_TRUCK)?;

            let progress = self.box_progress(box_count);
            let mut cargo = Vec::new();
            for index in 0..box_count {
                writeln!(self.out(), "\n  Box #{}:", index + 1)?;
                let weight = self.read_bounded("    Weight (kg): ", 0, MAX_BOX_WEIGHT_KG)?;
                let description = self.prompter.read_text("    Description: ")?;
                cargo.push(CargoItem::new(weight, description));
                progress.inc(1);
            }
            progress.finish_and_clear();

            let draft = TruckDraft::new(driver, plate, destination, empty_weight).with_cargo(cargo);
            let id = self.service.register(draft)?;
            let truck = self.service.truck(id)?;
            let summary = output::registration_summary(truck, self.service.model());
            write!(self.out(), "\n{}", summary)?;
        }

        writeln!(self.out(), "\n  Successfully added {} truck(s)!", count)?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        if self.service.fleet().is_empty() {
            writeln!(self.out(), "\n  No trucks in the system!")?;
            return Ok(());
        }
        let trucks: Vec<_> = self.service.fleet().iter().collect();
        let table = output::truck_table(&trucks, self.service.model());
        write!(self.out(), "\n{}", table)?;
        Ok(())
    }

    /// Show the table and ask for an id; `None` when there is nothing to pick
    fn pick_truck(&mut self, prompt: &str) -> Result<Option<u32>> {
        if self.service.fleet().is_empty() {
            writeln!(self.out(), "\n  No trucks in the system!")?;
            return Ok(None);
        }
        self.view_all()?;
        let id = self.read_bounded(prompt, 1, MAX_TRUCK_ID)?;
        Ok(Some(id))
    }

    fn view_details(&mut self) -> Result<()> {
        let Some(id) = self.pick_truck("\nEnter Truck ID to view details: ")? else {
            return Ok(());
        };
        let details = output::truck_details(self.service.truck(id)?, self.service.model());
        write!(self.out(), "{}", details)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let choice = self
            .prompter
            .read_int(&format!("{}Enter your choice: ", SEARCH_MENU), 1, 5)?;
        let field = match choice {
            1 => SearchField::Driver,
            2 => SearchField::Plate,
            3 => SearchField::Destination,
            4 => return self.filter_by_status(),
            _ => return Ok(()),
        };

        let term = self
            .prompter
            .read_text(&format!("\nEnter {} to search: ", field.label()))?;
        let results = output::search_results(&self.service.search(field, &term), field);
        write!(self.out(), "{}", results)?;
        Ok(())
    }

    fn filter_by_status(&mut self) -> Result<()> {
        let mut options = String::from("\n  Status Options:");
        for (index, status) in LifecycleStatus::ALL.iter().enumerate() {
            options.push_str(&format!(" {}. {}", index + 1, status));
        }
        writeln!(self.out(), "{}", options)?;

        let choice = self.prompter.read_int("\nSelect status: ", 1, LifecycleStatus::ALL.len() as i64)?;
        let status = LifecycleStatus::ALL[choice as usize - 1];
        let results = output::status_results(&self.service.filter_by_status(status), status.label());
        write!(self.out(), "{}", results)?;
        Ok(())
    }

    fn update_status(&mut self) -> Result<()> {
        let Some(id) = self.pick_truck("\nEnter Truck ID to update: ")? else {
            return Ok(());
        };
        let key = self.service.key_of(id)?;
        let current = self.service.truck(id)?.status();

        writeln!(self.out(), "\n  Current Status: {}", current)?;
        writeln!(self.out(), "\n  New Status Options:")?;
        for (index, status) in OperatorStatus::ALL.iter().enumerate() {
            writeln!(self.out(), "  {}. {}", index + 1, status)?;
        }
        let choice = self
            .prompter
            .read_int("\nSelect new status: ", 1, OperatorStatus::ALL.len() as i64)?;

        self.service
            .update_status(key, OperatorStatus::ALL[choice as usize - 1])?;
        writeln!(self.out(), "\n  Status updated successfully!")?;
        Ok(())
    }

    fn delete_truck(&mut self) -> Result<()> {
        let Some(id) = self.pick_truck("\nEnter Truck ID to delete: ")? else {
            return Ok(());
        };
        let key = self.service.key_of(id)?;
        let driver = self.service.truck(id)?.driver_name.clone();

        let prompt = format!("\n  Delete Truck #{} ({})?\n  Confirm? (y/n): ", id, driver);
        if self.prompter.confirm(&prompt)? {
            self.service.delete(key)?;
            writeln!(self.out(), "\n  Truck deleted successfully!")?;
        } else {
            writeln!(self.out(), "\n  Deletion cancelled.")?;
        }
        Ok(())
    }

    fn sort_trucks(&mut self) -> Result<()> {
        if self.service.fleet().is_empty() {
            writeln!(self.out(), "\n  No trucks to sort!")?;
            return Ok(());
        }

        let mut options = String::from("\n  Sort By:");
        for (index, order) in SortOrder::ALL.iter().enumerate() {
            options.push_str(&format!(" {}. {}", index + 1, order.label()));
        }
        writeln!(self.out(), "{}", options)?;

        let choice = self
            .prompter
            .read_int("\nSelect sort option: ", 1, SortOrder::ALL.len() as i64)?;
        self.service.sort(SortOrder::ALL[choice as usize - 1]);
        writeln!(self.out(), "\n  Trucks sorted!")?;
        self.view_all()
    }

    fn statistics(&mut self) -> Result<()> {
        let stats = self.service.statistics().ok_or(Error::NoData)?;
        let summary = output::statistics_summary(&stats);
        write!(self.out(), "{}", summary)?;
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        let path = self.config.report_path()?;
        self.service.write_report(&path)?;
        writeln!(self.out(), "\n  Report generated: {}", path.display())?;
        Ok(())
    }

    fn export_csv(&mut self) -> Result<()> {
        let path = self.config.csv_path()?;
        self.service.export_csv(&path)?;
        writeln!(self.out(), "\n  Exported to: {}", path.display())?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.service.save()?;
        let count = self.service.fleet().len();
        writeln!(
            self.out(),
            "\n  Data saved successfully! ({} trucks)",
            count
        )?;
        Ok(())
    }

    fn exit(&mut self) -> Result<Flow> {
        if self.service.is_modified()
            && self
                .prompter
                .confirm("\nYou have unsaved changes. Save before exiting? (y/n): ")?
        {
            self.save()?;
        }
        writeln!(
            self.out(),
            "\nThank you for using TWMS!\nSession ended: {}",
            Local::now().format("%H:%M:%S")
        )?;
        Ok(Flow::Exit)
    }

    fn read_bounded(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        let value = self.prompter.read_int(prompt, i64::from(min), i64::from(max))?;
        // read_int keeps the value within [min, max]
        Ok(u32::try_from(value).unwrap_or(min))
    }

    fn box_progress(&self, box_count: u32) -> ProgressBar {
        if !self.show_progress || box_count == 0 {
            return ProgressBar::hidden();
        }
        let progress = ProgressBar::new(u64::from(box_count));
        progress.set_style(
            ProgressStyle::with_template("[{bar:40}] {pos}/{len} boxes")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#> "),
        );
        progress
    }
}
