//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for fixed-spelling tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The decoded literal, if any
/// * `$line` - The line the token was attributed to
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Literal::Number(42.0)), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}

/// Creates a pattern handler for tokens whose spelling never varies.
///
/// The handler consumes the matched text and emits a token of the given
/// kind without a literal.
///
/// # Example
///
/// ```ignore
/// Pattern {
///     regex: Regex::new(r"^\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |scanner, matched| {
            scanner.advance_n(matched.len());
            scanner.add_token($kind, None);
        }
    };
}
