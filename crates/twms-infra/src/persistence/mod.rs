//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod backup;
mod file_truck_repo;
pub mod text_codec;

pub use backup::{format_backup, FileBackupWriter};
pub use file_truck_repo::FileTruckRepository;
