//! Configuration management for twms
//!
//! Config stored at: ~/.config/twms/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use twms_domain::{WeightModel, WEIGHT_LIMIT_KG};
use twms_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum permissible total truck weight (kg)
    #[serde(default = "default_weight_limit")]
    pub weight_limit_kg: u32,

    /// Data directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Primary data file name, inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_report_file")]
    pub report_file: String,

    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Write the backup snapshot after every change
    #[serde(default = "default_true")]
    pub auto_backup: bool,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_weight_limit() -> u32 {
    WEIGHT_LIMIT_KG
}

fn default_data_file() -> String {
    "truck_data.txt".to_string()
}

fn default_report_file() -> String {
    "truck_report.txt".to_string()
}

fn default_csv_file() -> String {
    "truck_export.csv".to_string()
}

fn default_backup_file() -> String {
    "backup.txt".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight_limit_kg: default_weight_limit(),
            data_dir: None,
            data_file: default_data_file(),
            report_file: default_report_file(),
            csv_file: default_csv_file(),
            backup_file: default_backup_file(),
            auto_backup: true,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("twms");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the data, backup, report, and CSV files
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("twms");
        Ok(data_dir)
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.data_file))
    }

    pub fn report_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.report_file))
    }

    pub fn csv_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.csv_file))
    }

    pub fn backup_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.backup_file))
    }

    pub fn weight_model(&self) -> Result<WeightModel> {
        if self.weight_limit_kg == 0 {
            return Err(ConfigError::InvalidValue("weight_limit_kg must be greater than 0".to_string()).into());
        }
        Ok(WeightModel::new(self.weight_limit_kg))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TWMS Configuration")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(f, "Weight limit:   {} kg", self.weight_limit_kg)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Data file:      {}", self.data_file)?;
        writeln!(f, "Report file:    {}", self.report_file)?;
        writeln!(f, "CSV file:       {}", self.csv_file)?;
        writeln!(f, "Backup file:    {}", self.backup_file)?;
        writeln!(f, "Auto backup:    {}", self.auto_backup)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
