pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod session;

pub use error::FoodError;
pub use session::{Session, SessionOutcome};
