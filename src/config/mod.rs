//! Configuration module for FinTrack
//!
//! This module provides configuration management including:
//! - Data directory and store file resolution
//! - User settings persistence, including the category seed list

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
