//! Event-replay driver for the calculator core.
//!
//! Reads JSON-lines events (`{"type": "add-digit", "payload": {"digit": "5"}}`)
//! from a file or stdin, dispatches each one and prints the display.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use zcalc::{Calculator, CalculatorDisplay, logging};

#[derive(Parser, Debug)]
#[command(
    name = "zcalc",
    version,
    about = "Replay calculator input events and print the display"
)]
struct Cli {
    /// JSON-lines event file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Print only the display after the last event.
    #[arg(long = "final")]
    final_only: bool,

    /// Print the display as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Exit with an error if any event fails to decode.
    #[arg(long)]
    strict: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init(logging::DEFAULT_DIRECTIVE);
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let rejected = replay_events(reader, &mut stdout.lock(), &cli)?;

    if cli.strict && rejected > 0 {
        bail!("{} event(s) could not be decoded", rejected);
    }
    Ok(())
}

/// Dispatch every event line and write the display. Returns how many lines
/// were rejected.
fn replay_events(reader: impl BufRead, out: &mut impl Write, cli: &Cli) -> Result<usize> {
    let mut calc = Calculator::new();
    let mut rejected = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read event")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Err(e) = calc.dispatch_json(line) {
            eprintln!("line {}: {}", index + 1, e);
            rejected += 1;
            continue;
        }

        if !cli.final_only {
            write_display(out, &calc.display(), cli.json)?;
        }
    }

    if cli.final_only {
        write_display(out, &calc.display(), cli.json)?;
    }
    tracing::debug!(rejected, state = ?calc.state(), "replay finished");
    Ok(rejected)
}

fn write_display(out: &mut impl Write, display: &CalculatorDisplay, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, display).context("failed to encode display")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\n", display)?;
    }
    Ok(())
}
