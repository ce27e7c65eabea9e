//! Infrastructure layer - file formats for the truck collection

pub mod export;
pub mod persistence;
