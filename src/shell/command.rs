//! Command parsing for submitted lines
//!
//! Splits a line on whitespace and recognizes the builtins:
//! - `cd <dir>` → change the working directory
//! - `pwd` → print the working directory
//! - `ls [args]` → long listing through the platform's lister
//! - `clear` or `cls` → clear the screen
//! - `exit` → end the session and forget history
//!
//! Anything else names an external program. No quoting, globbing or
//! redirection is interpreted.

/// Commands that can be parsed from a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ChangeDir(Option<String>),
    PrintDir,
    List(Vec<String>),
    Clear,
    Exit,
    External { program: String, args: Vec<String> },
    Empty,
}

/// Parse a submitted line into a Command
pub fn parse_command(input: &str) -> Command {
    let mut words = input.split_whitespace().map(str::to_string);
    let Some(program) = words.next() else {
        return Command::Empty;
    };
    let args: Vec<String> = words.collect();

    match program.as_str() {
        "cd" => Command::ChangeDir(args.into_iter().next()),
        "pwd" => Command::PrintDir,
        "ls" => Command::List(args),
        "clear" | "cls" => Command::Clear,
        "exit" => Command::Exit,
        _ => Command::External { program, args },
    }
}
