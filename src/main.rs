//! Expense Ledger CLI
//!
//! Reads a command script (`add`, `delete`, `calculate`, one per line) and
//! renders the expense list and results as each command is applied.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- session.csv
//! cargo run -- - < session.csv
//! cargo run -- session.csv --csv > ledger.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use expense_ledger::{
    run_script, LedgerController, LedgerError, LedgerView, RecordingView, Result, TextView,
};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::process;

/// How the session is reported on stdout.
enum OutputFormat {
    /// Render every update as text while the script runs.
    Text,
    /// Print only the final ledger as CSV.
    Csv,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut script_path = None;
    let mut format = OutputFormat::Text;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--csv" => format = OutputFormat::Csv,
            flag if flag.starts_with("--") => {
                return Err(LedgerError::UnknownOption(flag.to_string()))
            }
            _ => script_path = Some(arg),
        }
    }

    let script_path = script_path.ok_or(LedgerError::MissingArgument)?;
    let reader: Box<dyn Read> = if script_path == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&script_path)?))
    };

    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let view = TextView::new(stdout.lock());
            let mut out = run_session(view, reader)?.into_view().into_inner();
            out.flush()?;
        }
        OutputFormat::Csv => {
            let controller = run_session(RecordingView::new(), reader)?;
            let stdout = io::stdout();
            controller.ledger().write_csv(stdout.lock())?;
        }
    }

    Ok(())
}

fn run_session<V: LedgerView, R: Read>(view: V, reader: R) -> Result<LedgerController<V>> {
    let mut controller = LedgerController::new(view);
    run_script(&mut controller, reader)?;
    Ok(controller)
}
