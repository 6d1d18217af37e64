use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use numera::{evaluate, history::{History, format_result}};
use rustyline::{DefaultEditor, error::ReadlineError};

/// numera is a small interactive calculator for arithmetic expressions
/// with real and integer division, exponentiation, and absolute-value
/// bars.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive loop.
    expression: Option<String>,

    /// File the interactive loop records successful evaluations to.
    #[arg(long, default_value = "history.txt")]
    history: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        return match evaluate(&expression) {
            Ok(value) => {
                println!("{}", format_result(value));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match repl(&args.history) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the interactive read-eval-print loop.
///
/// Each line is evaluated as one expression. Successful evaluations are
/// echoed as `<input> = <result>` and persisted to the history file;
/// failures are reported and the loop continues with the next line. The
/// loop ends on `exit` (case-insensitive), end of input, or interrupt.
fn repl(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = History::load(path)?;
    let mut editor = DefaultEditor::new()?;

    println!("numera started. Type 'exit' to quit.");
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = editor.add_history_entry(line.as_str());
                match evaluate(&line) {
                    Ok(value) => {
                        let record = history.record(&line, value);
                        println!("{record}");
                        history.save()?;
                    },
                    Err(e) => println!("Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    Ok(())
}
