use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("history file {path}: {source}")]
    History { path: PathBuf, source: io::Error },

    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("failed to change directory: {0}")]
    ChangeDir(io::Error),

    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program}: {status}")]
    CommandFailed { program: String, status: ExitStatus },
}
