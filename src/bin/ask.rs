//! Command-line crop assistant
//!
//! One-shot:    cargo run --features cli --bin ask -- sandy soil with low rainfall
//! JSON output: cargo run --features cli --bin ask -- --json clay soil, pH 7.9
//! Interactive: cargo run --features cli --bin ask -- --interactive

use clap::Parser;
use crop_advisor::conversation::{quick_question, Role};
use crop_advisor::{advise, compose_reply, ChatSession, QUICK_QUESTIONS};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Crop recommendations from a description of your soil and climate")]
struct Args {
    /// Description of farm conditions (e.g. "sandy soil, low rainfall, pH 6.5")
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,

    /// Print the full advice (context, matched rules, result) as JSON
    #[arg(long)]
    json: bool,

    /// Chat loop on stdin; type 1-3 to pick a quick question, empty line to quit
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.interactive || args.text.is_empty() {
        return run_interactive();
    }

    let text = args.text.join(" ");
    let advice = advise(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        println!("{}", compose_reply(&advice.context, &advice.recommendation));
    }

    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    let mut session = ChatSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for message in session.messages() {
        if message.role == Role::Bot {
            writeln!(stdout, "{}\n", message.text)?;
        }
    }
    writeln!(stdout, "Quick questions:")?;
    for (i, q) in QUICK_QUESTIONS.iter().enumerate() {
        writeln!(stdout, "  {}. {}", i + 1, q)?;
    }

    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        let question = quick_question(input).unwrap_or(input);
        if let Some(reply) = session.ask(question) {
            writeln!(stdout, "\n{}", reply.text)?;
        }
    }

    Ok(())
}
