use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostics, Error, ErrorImpl, Reporter},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Literal, Token, TokenKind};

/// Consumes the text a pattern matched, plus whatever else the token needs.
pub(crate) type PatternHandler = fn(&mut Scanner<'_>, &str);

pub(crate) struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

// Every pattern is anchored at the cursor. Order is dispatch priority:
// the first pattern that matches owns the input.
lazy_static! {
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen) },
        Pattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen) },
        Pattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBrace) },
        Pattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBrace) },
        Pattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        Pattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        Pattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
        Pattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        Pattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        Pattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        Pattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BangEqual) },
        Pattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang) },
        Pattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqualEqual) },
        Pattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equal) },
        Pattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEqual) },
        Pattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        Pattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual) },
        Pattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        Pattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r"^/\*").unwrap(), handler: block_comment_handler },
        Pattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        Pattern { regex: Regex::new(r"^[ \r\t]+").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r"^\n").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: string_handler },
        Pattern { regex: Regex::new(r#"^""#).unwrap(), handler: unterminated_string_handler },
        Pattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        Pattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
    ];

    static ref COMMENT_DELIMITER: Regex = Regex::new(r"/\*|\*/").unwrap();
}

/// Single-pass scanner over one source string.
///
/// A scanner is consumed by [`Scanner::scan`], so its cursor can never be
/// carried over into a second input.
pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a mut dyn Reporter) -> Scanner<'a> {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: vec![],
            reporter,
        }
    }

    /// Runs the scan to the end of the input and returns every token
    /// recognised. Errors go to the reporter; none of them stop the scan.
    pub fn scan(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token();
        }

        tracing::debug!(tokens = self.tokens.len(), lines = self.line, "scan finished");
        self.tokens
    }

    fn scan_token(&mut self) {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                (pattern.handler)(self, matched.as_str());
                return;
            }
        }

        // Resynchronise by skipping exactly one character.
        if let Some(character) = remaining.chars().next() {
            self.advance_n(character.len_utf8());
            self.report(ErrorImpl::UnknownCharacter { character });
        }
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        self.current += n;
    }

    /// Advances past `text`, counting the newlines it contains.
    pub(crate) fn consume(&mut self, text: &str) {
        self.line += text.matches('\n').count();
        self.advance_n(text.len());
    }

    pub(crate) fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = String::from(&self.source[self.start..self.current]);
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, self.line));
    }

    pub(crate) fn report(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.line);
        tracing::trace!(%error, "lexical error");
        self.reporter.report(error);
    }

    pub(crate) fn remainder(&self) -> &'a str {
        &self.source[self.current..]
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn skip_handler(scanner: &mut Scanner, matched: &str) {
    scanner.consume(matched);
}

// `/*` and `*/` are consumed as whole pairs, so `/*/` opens a level
// without closing it.
fn block_comment_handler(scanner: &mut Scanner, matched: &str) {
    scanner.advance_n(matched.len());
    let mut depth = 1usize;

    while depth > 0 {
        let remaining = scanner.remainder();

        match COMMENT_DELIMITER.find(remaining) {
            Some(delimiter) => {
                scanner.consume(&remaining[..delimiter.end()]);
                if delimiter.as_str() == "/*" {
                    depth += 1;
                } else {
                    depth -= 1;
                }
            }
            None => {
                scanner.consume(remaining);
                scanner.report(ErrorImpl::UnterminatedComment);
                return;
            }
        }
    }
}

fn string_handler(scanner: &mut Scanner, matched: &str) {
    scanner.consume(matched);

    // No escape sequences: the literal is everything between the quotes.
    let contents = &matched[1..matched.len() - 1];
    scanner.add_token(TokenKind::String, Some(Literal::String(String::from(contents))));
}

fn unterminated_string_handler(scanner: &mut Scanner, _matched: &str) {
    // No closing quote anywhere ahead, so the rest of the input is the string.
    let remaining = scanner.remainder();
    scanner.consume(remaining);
    scanner.report(ErrorImpl::UnterminatedString);
}

fn number_handler(scanner: &mut Scanner, matched: &str) {
    scanner.advance_n(matched.len());

    // digit runs with an optional fraction always parse
    let value: f64 = matched.parse().unwrap_or_default();
    scanner.add_token(TokenKind::Number, Some(Literal::Number(value)));
}

fn symbol_handler(scanner: &mut Scanner, matched: &str) {
    scanner.advance_n(matched.len());

    let kind = lookup_keyword(matched).unwrap_or(TokenKind::Identifier);
    scanner.add_token(kind, None);
}

/// Scans `source` with a fresh scanner and a fresh set of diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source, &mut diagnostics).scan();

    (tokens, diagnostics)
}
