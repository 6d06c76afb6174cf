use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{error::ErrorKind, Parser};
use loxscan::{display_error, lexer::lexer::tokenize};

mod repl;

#[derive(Parser)]
#[command(name = "loxscan", version, about = "Tokenize Lox source files")]
struct Cli {
    /// Script to tokenize; starts an interactive prompt when omitted
    #[arg(allow_hyphen_values = true)]
    scripts: Vec<PathBuf>,
}

fn print_usage() -> ExitCode {
    println!("Usage: loxscan [script]");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => return print_usage(),
    };

    match cli.scripts.as_slice() {
        [] => match repl::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
        [script] => run_file(script),
        _ => print_usage(),
    }
}

fn run_file(path: &Path) -> ExitCode {
    let file_contents = match read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error: could not read '{}': {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let (tokens, diagnostics) = tokenize(&file_contents);
    tracing::debug!(elapsed = ?start.elapsed(), file = %path.display(), "tokenized");

    for token in &tokens {
        println!("{}", token);
    }

    let file_name = path.to_string_lossy();
    for error in &diagnostics {
        display_error(error, &file_contents, &file_name);
    }

    if diagnostics.had_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
