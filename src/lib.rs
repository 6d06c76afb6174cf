#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        [line 20] Error: Unknown character (unexpected character `#`)
        -> main.lox
           |
        20 | var a = #;
    */

    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("{}\n", error)
    } else {
        format!("{} ({})\n", error, error.get_tip())
    };
    rendered.push_str(&format!("-> {}\n", file));

    if let Some(line_text) = get_line(source, error.get_line()) {
        let line_string = error.get_line().to_string();
        let padding = line_string.len() + 2;

        rendered.push_str(&format!("{:>padding$}\n", "|"));
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    rendered
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}
