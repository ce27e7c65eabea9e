//! Command handlers

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use twms_app::app::{parse_cargo_arg, TruckDraft};
use twms_app::config::Config;
use twms_app::repository::open_fleet_service;
use twms_domain::service::SortOrder;
use twms_domain::{LifecycleStatus, OperatorStatus};
use twms_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, SearchBy};
use crate::menu::Session;
use crate::output;
use crate::prompt::Prompter;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        None | Some(Commands::Menu) => cmd_menu(&config),

        Some(Commands::Add {
            driver,
            plate,
            destination,
            empty_weight,
            cargo,
        }) => {
            let draft = TruckDraft::new(driver, plate, destination, empty_weight);
            cmd_add(&config, output_format, draft, &cargo)
        }

        Some(Commands::List { status }) => cmd_list(&config, output_format, status),

        Some(Commands::Show { id }) => cmd_show(&config, output_format, id),

        Some(Commands::Search { term, by }) => cmd_search(&config, output_format, &term, by),

        Some(Commands::Status { id, status }) => cmd_status(&config, id, status),

        Some(Commands::Delete { id, yes }) => cmd_delete(&config, id, yes),

        Some(Commands::Sort { order }) => cmd_sort(&config, output_format, order),

        Some(Commands::Stats) => cmd_stats(&config, output_format),

        Some(Commands::Report { output }) => cmd_report(&config, output),

        Some(Commands::Export { output }) => cmd_export(&config, output),

        Some(Commands::Config {
            show,
            set_weight_limit,
            set_data_dir,
            set_auto_backup,
            set_output,
            reset,
        }) => cmd_config(
            show,
            set_weight_limit,
            set_data_dir,
            set_auto_backup,
            set_output,
            reset,
        ),
    }
}

fn cmd_menu(config: &Config) -> Result<()> {
    let service = open_fleet_service(config)?;
    let stdin = io::stdin();
    let show_progress = stdin.is_terminal();

    Session::new(service, config, stdin.lock(), io::stdout().lock())
        .with_progress(show_progress)
        .run()
}

fn cmd_add(config: &Config, output_format: OutputFormat, draft: TruckDraft, cargo: &[String]) -> Result<()> {
    let items = cargo
        .iter()
        .map(|arg| parse_cargo_arg(arg))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut service = open_fleet_service(config)?;
    let id = service.register(draft.with_cargo(items))?;
    service.save()?;

    output::output_registered(output_format, service.truck(id)?, service.model())
}

fn cmd_list(config: &Config, output_format: OutputFormat, status: Option<LifecycleStatus>) -> Result<()> {
    let service = open_fleet_service(config)?;
    let trucks = match status {
        Some(status) => service.filter_by_status(status),
        None => service.fleet().iter().collect(),
    };
    output::output_trucks(output_format, &trucks, service.model())
}

fn cmd_show(config: &Config, output_format: OutputFormat, id: u32) -> Result<()> {
    let service = open_fleet_service(config)?;
    output::output_truck(output_format, service.truck(id)?, service.model())
}

fn cmd_search(config: &Config, output_format: OutputFormat, term: &str, by: SearchBy) -> Result<()> {
    let service = open_fleet_service(config)?;
    let field = by.into();
    let trucks = service.search(field, term);

    if output_format == OutputFormat::Json {
        output::output_trucks(output_format, &trucks, service.model())
    } else {
        print!("{}", output::search_results(&trucks, field));
        Ok(())
    }
}

fn cmd_status(config: &Config, id: u32, status: OperatorStatus) -> Result<()> {
    let mut service = open_fleet_service(config)?;
    let key = service.key_of(id)?;
    let previous = service.truck(id)?.status();
    let current = service.update_status(key, status)?;
    service.save()?;

    println!("Truck #{}: {} -> {}", id, previous, current);
    Ok(())
}

fn cmd_delete(config: &Config, id: u32, yes: bool) -> Result<()> {
    let mut service = open_fleet_service(config)?;
    let key = service.key_of(id)?;
    let driver = service.truck(id)?.driver_name.clone();

    if !yes {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        let prompt = format!("Delete Truck #{} ({})? (y/n): ", id, driver);
        if !prompter.confirm(&prompt)? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    service.delete(key)?;
    service.save()?;
    println!("Deleted truck #{} ({}); {} trucks remain", id, driver, service.fleet().len());
    Ok(())
}

fn cmd_sort(config: &Config, output_format: OutputFormat, order: SortOrder) -> Result<()> {
    let mut service = open_fleet_service(config)?;
    if service.fleet().is_empty() {
        println!("No trucks to sort.");
        return Ok(());
    }

    service.sort(order);
    service.save()?;

    let trucks: Vec<_> = service.fleet().iter().collect();
    output::output_trucks(output_format, &trucks, service.model())
}

fn cmd_stats(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_fleet_service(config)?;
    match service.statistics() {
        Some(stats) => output::output_statistics(output_format, &stats),
        None => {
            println!("{}.", Error::NoData);
            Ok(())
        }
    }
}

fn cmd_report(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let service = open_fleet_service(config)?;
    if service.fleet().is_empty() {
        println!("{}.", Error::NoData);
        return Ok(());
    }

    let path = resolve_output(output, config.report_path())?;
    service.write_report(&path)?;
    println!("Report generated: {}", path.display());
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let service = open_fleet_service(config)?;
    if service.fleet().is_empty() {
        println!("{}.", Error::NoData);
        return Ok(());
    }

    let path = resolve_output(output, config.csv_path())?;
    let count = service.export_csv(&path)?;
    println!("Exported {} trucks to: {}", count, path.display());
    Ok(())
}

fn resolve_output(output: Option<PathBuf>, default: Result<PathBuf>) -> Result<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => default,
    }
}

fn cmd_config(
    show: bool,
    set_weight_limit: Option<u32>,
    set_data_dir: Option<PathBuf>,
    set_auto_backup: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(limit) = set_weight_limit {
        config.weight_limit_kg = limit;
        config.weight_model()?;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(auto_backup) = set_auto_backup {
        config.auto_backup = auto_backup;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
