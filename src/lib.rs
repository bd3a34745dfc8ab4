pub mod commands;
pub mod config;
pub mod food;

// Re-export commonly used items
pub use food::{FoodError, Session, SessionOutcome};
