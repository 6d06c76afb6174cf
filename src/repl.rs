use loxscan::lexer::lexer::tokenize;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};

/// Scans one line at a time until end of input.
///
/// Every line gets its own scan, so line numbers restart at 1 and errors
/// never carry over to the next line.
pub fn run() -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl = DefaultEditor::with_config(config)?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                run_line(&line);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn run_line(line: &str) {
    let (tokens, diagnostics) = tokenize(line);

    for token in &tokens {
        println!("{}", token);
    }

    for error in &diagnostics {
        eprintln!("{}", error);
    }
}
