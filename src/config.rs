// ABOUTME: Configuration and constants for the Monk interpreter

pub const VERSION: &str = "0.1.0";

pub const WELCOME_MESSAGE: &str = "Monk programming language REPL";
pub const WELCOME_SUBTITLE: &str = "Type in commands to evaluate them";

pub const PROMPT: &str = ">> ";
pub const HISTORY_FILE: &str = ".monk_history";
