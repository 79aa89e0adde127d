use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use yatra_core::{DialogRequest, RandomSource, RuleSet, SeededRandom, ThreadRandom};
use yatra_nlu::{load_rule_set, select_backend, DialogueBackend, NluConfig};
use yatra_observability::{init_tracing_to_stderr, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "yatra")]
#[command(about = "eco Yatra chat intent responder")]
struct Cli {
    /// JSON rule file replacing the built-in intents.
    #[arg(long, env = "YATRA_INTENTS_PATH")]
    intents: Option<PathBuf>,

    /// Seed for reply selection, for repeatable output.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the intent and confidence for a query.
    Classify { query: String },
    /// Print the full reply payload for a query.
    Ask {
        query: String,
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Interactive chat on stdin.
    Chat,
    /// List the active intents.
    Intents,
}

#[derive(Debug, Serialize)]
struct IntentSummary<'a> {
    name: &'a str,
    patterns: usize,
    responses: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing_to_stderr("yatra_cli");
    let cli = Cli::parse();

    let rules = Arc::new(load_rule_set(cli.intents.as_deref())?);
    let random: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };

    match cli.command {
        Command::Classify { query } => {
            let result = rules.classify(&query);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Ask { query, session_id } => {
            let backend = select_backend(&NluConfig::from_env(), rules, random, AppMetrics::shared())?;
            let request = DialogRequest {
                query: Some(query),
                session_id,
            };
            let payload = backend.reply(&request).await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Chat => {
            let backend = select_backend(&NluConfig::from_env(), rules, random, AppMetrics::shared())?;
            run_chat(backend.as_ref()).await?;
        }
        Command::Intents => print_intents(&rules)?,
    }

    Ok(())
}

async fn run_chat(backend: &dyn DialogueBackend) -> Result<()> {
    let session_id = uuid::Uuid::new_v4().to_string();

    println!("eco Yatra chat ({} backend). type 'exit' to quit.", backend.name());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let payload = backend
            .reply(&DialogRequest::new(message).with_session(session_id.clone()))
            .await?;

        println!("\n{}\n  [{} {:.2}]\n", payload.response, payload.intent, payload.confidence);
    }

    Ok(())
}

fn print_intents(rules: &RuleSet) -> Result<()> {
    let summary = rules
        .rules()
        .iter()
        .map(|rule| IntentSummary {
            name: rule.name(),
            patterns: rule.pattern_count(),
            responses: rule.responses().len(),
        })
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
