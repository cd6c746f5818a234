//! Shared helper functions for CLI commands
//!
//! Config loading, store opening and gateway construction used across
//! subcommands.

use anyhow::Context;
use faqbot_core::{
    error::Result, services::CompletionGateway, ChatSimulator, GeminiGateway, JsonFileStore,
    SimulatorConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Load the simulator config, or defaults when no file is given
pub fn load_config(path: Option<&Path>) -> Result<SimulatorConfig> {
    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            let config = SimulatorConfig::from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?;
            Ok(config)
        }
        None => Ok(SimulatorConfig::default()),
    }
}

/// Open the knowledge store resolved from CLI arg, env var, config, or default
pub fn open_store(
    config: &SimulatorConfig,
    cli_path: Option<PathBuf>,
) -> Result<Arc<JsonFileStore>> {
    let path = config.resolve_store_path(cli_path);
    debug!("Using knowledge store: {}", path.display());
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open knowledge store '{}'", path.display()))?;
    Ok(Arc::new(store))
}

/// Build a simulator over the JSON store and the Gemini gateway
pub fn build_simulator(
    config: SimulatorConfig,
    cli_path: Option<PathBuf>,
) -> Result<ChatSimulator> {
    let store = open_store(&config, cli_path)?;
    let gateway: Arc<dyn CompletionGateway> = Arc::new(GeminiGateway::new(config.llm_config())?);
    Ok(ChatSimulator::new(gateway, store.clone(), store, config))
}
