//! CLI entrypoint for consensus-debate
//!
//! Wires the layers together with dependency injection: the HTTP gateway
//! adapter is constructed here and handed to the debate use case.

mod output;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use debate_application::{RunDebateInput, RunDebateUseCase};
use debate_domain::Question;
use debate_infrastructure::HttpBackendGateway;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Per-backend answers with timings, then the consensus
    Full,
    /// Only the synthesized consensus answer
    Synthesis,
    /// The complete result as JSON
    Json,
}

/// CLI arguments for consensus-debate
#[derive(Parser, Debug)]
#[command(name = "consensus-debate")]
#[command(version, about = "Three backends answer your question, a fourth synthesizes the consensus")]
struct Cli {
    /// The question to debate
    question: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    output: OutputFormat,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let Some(question) = Question::try_new(cli.question) else {
        bail!("Question must not be empty");
    };

    info!("Starting consensus debate");

    // === Dependency Injection ===
    let gateway = Arc::new(HttpBackendGateway::new());
    let use_case = RunDebateUseCase::new(gateway);

    let result = use_case.execute(RunDebateInput::new(question)).await?;

    let rendered = match cli.output {
        OutputFormat::Full => output::format_full(&result),
        OutputFormat::Synthesis => result.final_answer.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };

    println!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_to_full() {
        let cli = Cli::try_parse_from(["consensus-debate", "What is 2+2?"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Full);
    }

    #[test]
    fn test_output_formats_parse() {
        for (flag, expected) in [
            ("full", OutputFormat::Full),
            ("synthesis", OutputFormat::Synthesis),
            ("json", OutputFormat::Json),
        ] {
            let cli = Cli::try_parse_from(["consensus-debate", "Q", "--output", flag]).unwrap();
            assert_eq!(cli.output, expected);
        }
    }
}
