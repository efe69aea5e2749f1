// ABOUTME: CLI entry point: file execution driver and the interactive REPL

mod ast;
mod config;
mod env;
mod error;
mod eval;
mod highlighter;
mod lexer;
mod parser;
mod token;
mod value;

use clap::Parser;
use env::Environment;
use highlighter::MonkHelper;
use lexer::Lexer;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::rc::Rc;
use value::Value;

/// Tree-walking interpreter for the Monk programming language
#[derive(Parser, Debug)]
#[command(name = "monk")]
#[command(version = config::VERSION)]
#[command(about = "Tree-walking interpreter for the Monk programming language")]
struct CliArgs {
    /// Script file to execute (optional - if not provided, starts REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level)?;

    match args.script {
        Some(script) => run_file(&script),
        None => repl(),
    }
}

/// Executes a script file and prints the result, exiting with status 1 on
/// driver failures (bad extension, unreadable file, parse errors).
fn run_file(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.to_string_lossy().ends_with(".monk") {
        println!("Error: File must have .monk extension");
        process::exit(1);
    }

    match eval_file(path) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(message) => {
            println!("Error: {}", message);
            process::exit(1);
        }
    }

    Ok(())
}

/// Evaluates a script file in a fresh environment. Returns the inspected
/// form of the result, or `None` when the result is null. A runtime error
/// is a result in its own right, not a driver failure.
fn eval_file(path: &Path) -> Result<Option<String>, String> {
    let source =
        fs::read_to_string(path).map_err(|error| format!("error reading file: {}", error))?;

    let mut parser = parser::Parser::new(Lexer::new(&source));
    let program = parser.parse();

    if !parser.errors().is_empty() {
        let mut message = format!("parser errors in file {}:\n", path.display());
        for error in parser.errors() {
            message.push_str(&format!("\t{}\n", error));
        }
        return Err(message);
    }

    debug!(
        "parsed {} top-level statements from {}",
        program.statements.len(),
        path.display()
    );

    let env = Environment::new();

    match eval::eval(&program, &env) {
        Ok(Value::Null) => Ok(None),
        Ok(result) => Ok(Some(result.to_string())),
        Err(error) => Ok(Some(format!("ERROR: {}", error))),
    }
}

/// The interactive loop. Bindings persist across lines in one session
/// environment; parse and runtime errors are reported and the loop
/// continues at the next prompt.
fn repl() -> Result<(), Box<dyn Error>> {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = Editor::with_config(rl_config)
        .map_err(|error| format!("Failed to initialize REPL: {}", error))?;

    rl.set_helper(Some(MonkHelper::new()));

    let _ = rl.load_history(config::HISTORY_FILE);

    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);

    let env = Environment::new();

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("Goodbye!");
                    break;
                }

                eval_line(line, &env);
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);

    Ok(())
}

/// Parses and evaluates one REPL line against the session environment.
fn eval_line(line: &str, env: &Rc<Environment>) {
    let mut parser = parser::Parser::new(Lexer::new(line));
    let program = parser.parse();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            println!("{}", error);
        }
        return;
    }

    match eval::eval(&program, env) {
        Ok(Value::Null) => {}
        Ok(result) => println!("{}", result),
        Err(error) => println!("ERROR: {}", error),
    }
}
