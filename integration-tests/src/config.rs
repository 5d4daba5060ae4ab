use std::fs;
use std::path::PathBuf;

use elite_transaction_client::config::ClientConfig;
use serde::Deserialize;

/// Settings for the live-instance smoke tests, read from `secrets.json`.
#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub client: ClientConfig,
    pub process_code: String,
    pub object_name: String,
    /// Primary key of an existing record that the tests may edit.
    pub existing_key: i32,
}

pub fn load_secrets() -> Result<Secrets, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("secrets.json");
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read secrets.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
}
