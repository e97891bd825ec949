//! ANSI color helper utilities for terminal output.

use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Profit color: negative → red, break-even or better → green.
pub fn color_for_profit(profit: Decimal) -> &'static str {
    if profit < Decimal::ZERO { RED } else { GREEN }
}

/// Status label color used on summary tables.
pub fn color_for_status_label(label: &str) -> &'static str {
    match label {
        "In Progress" => CYAN,
        "Completed" => GREEN,
        "Pending" => YELLOW,
        _ => RESET,
    }
}

/// Wrap a value in its profit color.
pub fn colorize_profit(display: &str, profit: Decimal) -> String {
    format!("{}{}{}", color_for_profit(profit), display, RESET)
}
