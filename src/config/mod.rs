//! Configuration module for sqlmodel.
//!
//! Handles generator settings loaded from TOML.

mod settings;

pub use settings::{GeneratorSettings, SettingsError};
