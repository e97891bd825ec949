//! Console status messages with a consistent icon + color prefix.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD_BLUE: &str = "\x1b[1;34m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_YELLOW: &str = "\x1b[1;33m";
const BOLD_RED: &str = "\x1b[1;31m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}ℹ️{} {}", BOLD_BLUE, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}✅{} {}", BOLD_GREEN, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}⚠️{} {}", BOLD_YELLOW, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}❌{} {}", BOLD_RED, RESET, msg);
}

/// Section header for multi-block command output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}== {} =={}", BOLD_BLUE, msg, RESET);
}
