// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors for log and console output.

use std::{fmt, sync::LazyLock};

use regex::Regex;

pub const GREY: &str = "\x1b[0;0m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const RESET: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[ABCDHJKSTfGmsu]").expect("valid ANSI escape pattern")
});

/// Removes ANSI escape sequences, e.g. from the output of a colorized external tool.
pub fn strip_color(s: impl AsRef<str>) -> String {
    ANSI_ESCAPE.replace_all(s.as_ref(), "").into_owned()
}

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

impl<T: fmt::Display + ?Sized> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_escapes() {
        let colored = "Transaction Hash: 0x1".mint();
        assert_ne!(colored, "Transaction Hash: 0x1");
        assert_eq!(strip_color(colored), "Transaction Hash: 0x1");
    }
}
