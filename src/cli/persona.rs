//! Persona commands

use faqbot_core::{error::Result, Persona, PersonaStore, SimulatorConfig};
use std::path::PathBuf;

use super::helpers::open_store;

pub fn show(config: &SimulatorConfig, store_path: Option<PathBuf>) -> Result<()> {
    let persona = open_store(config, store_path)?.persona()?;
    println!("Nome: {}", persona.name);
    println!("Tom de voz: {}", persona.tone_description);
    Ok(())
}

pub fn set(
    name: String,
    tone: String,
    config: &SimulatorConfig,
    store_path: Option<PathBuf>,
) -> Result<()> {
    let store = open_store(config, store_path)?;
    store.set_persona(Persona {
        name: name.trim().to_string(),
        tone_description: tone.trim().to_string(),
    })?;
    println!("✓ Persona saved to {}", store.path().display());
    Ok(())
}
