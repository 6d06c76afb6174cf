//! Lexical analysis for Lox source text.
//!
//! This module contains the scanner that converts source code into a
//! flat sequence of tokens. It handles:
//!
//! - Tokenization driven by an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, string and number literals
//! - Line comments and nested block comments
//! - Line tracking, and reporting of lexical errors without stopping

pub mod lexer;
pub mod tokens;
