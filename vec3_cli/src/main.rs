//! Standalone console binary.
//!
//! Usage:
//!   cargo run -p vec3_cli -- [--config options.json] [--precision 3] [--scientific] [--sign-plus]
//!
//! Reads one command per line from stdin and prints the result using the
//! configured number formatting.
//!
//! Console commands (see `help`):
//!   norm ( 3, 4, 0 )       - Euclidean length
//!   dot (1,0,0) (0.5,2,1)  - Dot product
//!   set precision 2        - Change output formatting
//!   quit                   - Exit

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};
use vec3::{FormatOptions, Notation};
use vec3_cli::Console;

fn parse_args() -> anyhow::Result<FormatOptions> {
    let mut options = FormatOptions::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                let path = &args[i + 1];
                let text =
                    fs::read_to_string(path).with_context(|| format!("read config {}", path))?;
                options = FormatOptions::from_json_str(&text)
                    .with_context(|| format!("parse config {}", path))?;
                i += 2;
            }
            "--precision" if i + 1 < args.len() => {
                let digits = &args[i + 1];
                options.precision = Some(
                    digits
                        .parse()
                        .with_context(|| format!("invalid precision: {}", digits))?,
                );
                i += 2;
            }
            "--scientific" => {
                options.notation = Notation::Scientific;
                i += 1;
            }
            "--sign-plus" => {
                options.sign_plus = true;
                i += 1;
            }
            other => {
                warn!(arg = other, "ignoring unknown argument");
                i += 1;
            }
        }
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let options = parse_args()?;
    info!(
        precision = ?options.precision,
        notation = %options.notation,
        sign_plus = options.sign_plus,
        "Starting console"
    );

    let mut console = Console::with_options(options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("] ");
        stdout.flush().context("flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            break;
        }

        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }

        match console.exec(line) {
            Ok(output) => {
                for out in output {
                    println!("{}", out);
                }
            }
            Err(err) => eprintln!("error: {:#}", err),
        }
    }

    info!(commands = console.history().len(), "Console closed");
    Ok(())
}
