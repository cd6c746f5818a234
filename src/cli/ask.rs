//! One-shot question

use faqbot_core::{error::Result, SimulatorConfig};
use std::path::PathBuf;

use super::helpers::build_simulator;

pub async fn handle(
    question: String,
    config: SimulatorConfig,
    store_path: Option<PathBuf>,
) -> Result<()> {
    let mut simulator = build_simulator(config, store_path)?;
    let exchange = simulator.send(&question).await?;

    if let Some(bot) = exchange.bot_turn {
        println!("{}", bot.text);
        println!();
        println!("classification: {}", bot.classification);
    }
    Ok(())
}
