//! User-facing status lines: colored, icon-prefixed, one call per outcome.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn paint<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(Level::Error, msg));
}
