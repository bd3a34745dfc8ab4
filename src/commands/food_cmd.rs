use log::info;
use std::io;

use crate::config::ClientSettings;
use crate::food::api::spoonacular::SpoonacularClient;
use crate::food::config::FoodConfig;
use crate::food::error::FoodError;
use crate::food::session::{Session, SessionOutcome};

/// Loads the credential once and runs an interactive session on the process terminal.
pub async fn handle_command(query: &str) -> Result<SessionOutcome, FoodError> {
    let config = FoodConfig::from_env()?;
    let settings = ClientSettings::from_env();
    info!("using food service at {}", settings.base_url);

    let client = SpoonacularClient::new(config, &settings)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&client, stdin.lock(), stdout.lock());
    session.run(query).await
}
