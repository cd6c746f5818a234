//! Grounding instruction preview

use faqbot_core::{
    error::Result, GroundingContractBuilder, KnowledgeRepository, PersonaStore, SimulatorConfig,
};
use std::path::PathBuf;

use super::helpers::open_store;

/// Print the instruction the next dispatch would send
pub fn handle(config: &SimulatorConfig, store_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, store_path)?;
    let contract =
        GroundingContractBuilder::new().build(&store.snapshot()?, &store.persona()?);
    println!("{}", contract.system_instruction);
    Ok(())
}
