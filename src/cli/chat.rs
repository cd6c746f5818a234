//! Interactive chat simulation
//!
//! Each input line is sent as a user utterance. Lines starting with `/` are
//! simulator commands. Ctrl-C while a reply is pending abandons that reply;
//! Ctrl-C at the prompt ends the simulation.

use faqbot_core::{
    error::Result, ChatSimulator, Classification, SimulationReport, SimulatorConfig,
};
use std::future::Future;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::helpers::build_simulator;

const HELP: &str = "Comandos: /report  /restart  /good <n>  /bad <n>  /export  /help  /quit";

enum Command {
    Report,
    Restart,
    Feedback { index: usize, helpful: bool },
    Export,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let rest = line.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let command = match name {
        "report" => Command::Report,
        "restart" => Command::Restart,
        "good" | "bad" => match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(index) => Command::Feedback {
                index,
                helpful: name == "good",
            },
            None => Command::Unknown(line.to_string()),
        },
        "export" => Command::Export,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

/// Handle the interactive chat command
pub async fn handle(config: SimulatorConfig, store_path: Option<PathBuf>) -> Result<()> {
    let mut simulator = build_simulator(config, store_path)?;
    debug!("Chat session {}", simulator.session().id());

    println!();
    println!("💬 Simulador de Chat");
    println!("   {}", HELP);
    println!();

    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut simulator, stdin, ctrl_c).await?;

    let snapshot = simulator.report();
    if snapshot.total_bot_turns > 0 {
        println!();
        print!("{}", SimulationReport::new(&snapshot));
    }
    Ok(())
}

/// Resolves on the next Ctrl-C; never resolves if no handler can be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Read-eval loop over `input` until EOF, `/quit`, or an idle interrupt
///
/// `interrupt` is called once per wait: at the prompt it ends the session,
/// while a reply is pending it cancels only that reply.
async fn run_session<R, I, F>(
    simulator: &mut ChatSimulator,
    input: R,
    mut interrupt: I,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    I: FnMut() -> F,
    F: Future<Output = ()>,
{
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            _ = interrupt() => {
                info!("Interrupted at prompt, ending simulation");
                break;
            }
            line = lines.next_line() => match line? {
                Some(line) => line,
                None => break,
            },
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Quit) => break,
            Some(command) => run_command(simulator, command)?,
            None => converse(simulator, line, interrupt()).await?,
        }
    }
    Ok(())
}

async fn converse<F>(simulator: &mut ChatSimulator, line: &str, interrupt: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let cancel = CancellationToken::new();
    let exchange = {
        let send = simulator.send_cancellable(line, cancel.clone());
        tokio::pin!(send);
        tokio::select! {
            exchange = &mut send => exchange,
            _ = interrupt => {
                cancel.cancel();
                send.await
            }
        }
    };

    match exchange?.bot_turn {
        Some(bot) => {
            let number = simulator.session().bot_turns().count();
            println!("🤖 [#{}] {}", number, bot.text);
            if bot.classification == Classification::Fallback {
                println!("   (não reconhecida)");
            }
        }
        None => println!("   (resposta cancelada)"),
    }
    Ok(())
}

fn run_command(simulator: &mut ChatSimulator, command: Command) -> Result<()> {
    match command {
        Command::Report => {
            let snapshot = simulator.report();
            print!("{}", SimulationReport::new(&snapshot));
        }
        Command::Restart => {
            simulator.restart();
            println!("✓ Nova simulação iniciada");
        }
        Command::Feedback { index, helpful } => {
            if simulator.record_feedback_by_index(index, helpful) {
                println!("Obrigado pelo seu feedback!");
            } else {
                println!("Feedback ignorado para #{}", index);
            }
        }
        Command::Export => println!("{}", simulator.transcript_json()?),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
        Command::Unknown(raw) => println!("Comando desconhecido: {} ({})", raw, HELP),
    }
    Ok(())
}
