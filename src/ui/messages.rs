//! Operator-facing messages for the CLI (and the form's status line).

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(&self) -> Style {
        match self {
            Level::Info => Blue.bold(),
            Level::Success => Green.bold(),
            Level::Warning => Yellow.bold(),
            Level::Error => Red.bold(),
        }
    }
}

/// One line for the terminal: coloured icon, then the plain message.
pub fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.style().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Blue.bold().paint(format!("====================== {msg}")));
}
