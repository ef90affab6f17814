/// Database configuration and connection management
pub mod database;

/// Gym settings loading from config.toml
pub mod settings;

pub use settings::{AdminSeed, GymSettings};
