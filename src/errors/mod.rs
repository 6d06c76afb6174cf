//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - `Error`, a lexical error carrying the line it was found on
//! - `ErrorImpl`, the three kinds of lexical error
//! - `Reporter`, the interface the scanner reports errors through
//! - `Diagnostics`, the ordered accumulator callers inspect after a scan

pub mod errors;
