use super::command::Command;
use crate::error::ShellError;
use crate::signals;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::env;
use std::io::Write;
use std::process;
use tracing::{debug, info};

/// What the session loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one parsed command. Output of builtins goes to `out`; external
/// programs inherit the shell's standard streams.
pub fn execute<W: Write>(command: Command, out: &mut W) -> Result<Flow, ShellError> {
    match command {
        Command::Empty => {}
        Command::ChangeDir(None) => return Err(ShellError::MissingArgument("path required for cd")),
        Command::ChangeDir(Some(dir)) => {
            env::set_current_dir(&dir).map_err(ShellError::ChangeDir)?;
            debug!(dir = %dir, "changed directory");
        }
        Command::PrintDir => {
            writeln!(out, "{}", env::current_dir()?.display())?;
        }
        Command::List(args) => {
            let (program, mut full_args) = list_program();
            full_args.extend(args);
            run_external(program, &full_args)?;
        }
        Command::Clear => {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            out.flush()?;
        }
        Command::Exit => {
            writeln!(out, "Closing shell...")?;
            return Ok(Flow::Exit);
        }
        Command::External { program, args } => run_external(&program, &args)?,
    }
    Ok(Flow::Continue)
}

fn list_program() -> (&'static str, Vec<String>) {
    if cfg!(windows) {
        ("cmd", vec!["/c".to_string(), "dir".to_string()])
    } else {
        ("ls", vec!["-la".to_string()])
    }
}

fn run_external(program: &str, args: &[String]) -> Result<(), ShellError> {
    info!(program, ?args, "spawning");
    let _foreground = signals::foreground_command();
    let status = process::Command::new(program)
        .args(args)
        .status()
        .map_err(|source| ShellError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ShellError::CommandFailed {
            program: program.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_without_path_is_error() {
        let mut out = Vec::new();
        let err = execute(Command::ChangeDir(None), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "path required for cd");
    }

    #[test]
    fn test_cd_to_missing_directory_is_error() {
        let mut out = Vec::new();
        let err = execute(
            Command::ChangeDir(Some("/definitely/not/here/12345".to_string())),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ShellError::ChangeDir(_)));
    }

    #[test]
    fn test_exit_says_goodbye() {
        let mut out = Vec::new();
        assert_eq!(execute(Command::Exit, &mut out).unwrap(), Flow::Exit);
        assert_eq!(String::from_utf8(out).unwrap(), "Closing shell...\n");
    }

    #[test]
    fn test_pwd_prints_current_dir() {
        let mut out = Vec::new();
        execute(Command::PrintDir, &mut out).unwrap();
        let expected = format!("{}\n", env::current_dir().unwrap().display());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_unknown_program_is_spawn_error() {
        let mut out = Vec::new();
        let err = execute(
            Command::External {
                program: "gosh-no-such-program-12345".to_string(),
                args: vec![],
            },
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ShellError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_status() {
        let mut out = Vec::new();
        let err = execute(
            Command::External {
                program: "false".to_string(),
                args: vec![],
            },
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ShellError::CommandFailed { .. }));
    }

    #[test]
    fn test_clear_emits_escape() {
        let mut out = Vec::new();
        execute(Command::Clear, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\x1b[2J"));
    }
}
