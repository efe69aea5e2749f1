// ABOUTME: Syntax highlighter for the REPL with ANSI color support
// Implements rustyline's Highlighter trait to colorize Monk keywords,
// literals, and delimiters while preserving display width

use crate::token::{lookup_ident, TokenKind};
use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;

// 3-bit/4-bit ANSI colors for maximum terminal compatibility
const COLOR_RESET: &str = "\x1b[0m";
const COLOR_KEYWORD: &str = "\x1b[1;35m"; // Bold magenta
const COLOR_NUMBER: &str = "\x1b[33m"; // Yellow
const COLOR_BOOLEAN: &str = "\x1b[33m"; // Yellow
const COLOR_OPERATOR: &str = "\x1b[36m"; // Cyan
const COLOR_DELIMITER: &str = "\x1b[1;34m"; // Bold blue

/// Rustyline helper providing syntax-aware colors for Monk input lines.
pub struct MonkHelper;

impl MonkHelper {
    pub fn new() -> Self {
        MonkHelper
    }
}

impl Default for MonkHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for MonkHelper {}

impl Completer for MonkHelper {
    type Candidate = String;
}

impl Hinter for MonkHelper {
    type Hint = String;
}

impl Validator for MonkHelper {}

impl Highlighter for MonkHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line);

        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn highlight_line(line: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' | ')' | '{' | '}' => {
                result.push_str(COLOR_DELIMITER);
                result.push(chars[i]);
                result.push_str(COLOR_RESET);
                i += 1;
            }

            '+' | '-' | '*' | '/' | '<' | '>' | '=' | '!' => {
                result.push_str(COLOR_OPERATOR);
                result.push(chars[i]);
                result.push_str(COLOR_RESET);
                i += 1;
            }

            '0'..='9' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }

                let number: String = chars[start..i].iter().collect();
                result.push_str(COLOR_NUMBER);
                result.push_str(&number);
                result.push_str(COLOR_RESET);
            }

            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_ascii_alphanumeric() || chars[i] == '_')
                {
                    i += 1;
                }

                let word: String = chars[start..i].iter().collect();

                match lookup_ident(&word) {
                    TokenKind::True | TokenKind::False => {
                        result.push_str(COLOR_BOOLEAN);
                        result.push_str(&word);
                        result.push_str(COLOR_RESET);
                    }
                    TokenKind::Ident => result.push_str(&word),
                    _ => {
                        result.push_str(COLOR_KEYWORD);
                        result.push_str(&word);
                        result.push_str(COLOR_RESET);
                    }
                }
            }

            c => {
                result.push(c);
                i += 1;
            }
        }
    }

    result
}
