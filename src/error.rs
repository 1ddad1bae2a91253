use std::io;
use thiserror::Error;

/// Errors produced while running a command line.
///
/// Apart from [`ShellError::Input`], every variant is recoverable: it is written to
/// the error stream and the shell carries on with the next line. The `Display`
/// output is the exact message the user sees.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the next line failed for a reason other than end of input.
    #[error("error reading input: {0}")]
    Input(#[source] io::Error),

    #[error("pwd: error retrieving current directory: {0}")]
    Pwd(#[source] io::Error),

    /// The `cd` target is missing or is not a directory.
    #[error("cd: {0}: No such file or directory")]
    NoSuchDirectory(String),

    #[error("cd: HOME not set")]
    HomeNotSet,

    #[error("cd: {path}: {source}")]
    ChangeDirectory {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An external program was resolved but could not be started.
    #[error("{name}: error executing command: {source}")]
    Launch {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    /// Whether the shell has to stop after reporting this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Input(_))
    }
}
