//! Knowledge base commands

use faqbot_core::{
    error::Result, knowledge::group_by_category, EntryId, KnowledgeRepository, NewEntry,
    SimulatorConfig,
};
use std::path::PathBuf;

use super::helpers::open_store;

/// List entries grouped by category
pub fn list(config: &SimulatorConfig, store_path: Option<PathBuf>) -> Result<()> {
    let entries = open_store(config, store_path)?.snapshot()?;

    if entries.is_empty() {
        println!("Nenhuma FAQ cadastrada.");
        return Ok(());
    }

    for (category, members) in group_by_category(&entries) {
        println!("{} ({})", category, members.len());
        for entry in members {
            println!("  [{}]", entry.id);
            println!("    P: {}", entry.question);
            println!("    R: {}", entry.answer);
        }
        println!();
    }

    Ok(())
}

pub fn add(
    question: String,
    answer: String,
    category: String,
    config: &SimulatorConfig,
    store_path: Option<PathBuf>,
) -> Result<()> {
    let store = open_store(config, store_path)?;
    let entry = store.add(NewEntry {
        question,
        answer,
        category,
    })?;
    println!("✓ Added FAQ {}", entry.id);
    Ok(())
}

pub fn remove(id: String, config: &SimulatorConfig, store_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, store_path)?;
    if store.remove(&EntryId(id.clone()))? {
        println!("✓ Removed FAQ {}", id);
    } else {
        println!("No FAQ with id {}", id);
    }
    Ok(())
}
