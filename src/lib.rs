use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod builtins;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod parser;
pub mod path;
pub mod system;

#[cfg(test)]
mod testing;

pub use builtins::Builtin;
pub use config::Config;
pub use editor::LineSource;
pub use error::ShellError;
pub use parser::tokenize;
pub use path::find_executable;
pub use system::{OsSystem, System};

/// Result of a command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    /// The shell should continue running.
    Continue,
    /// The shell should exit with the provided code.
    Exit(i32),
}

/// A command interpreter session.
///
/// Owns the handle to the operating system and the working directory, which
/// is the only state carried from one command to the next.
pub struct Shell<S: System = OsSystem> {
    sys: S,
    cwd: PathBuf,
}

impl<S: System> Shell<S> {
    /// Starts a session in the current directory reported by `sys`.
    pub fn new(sys: S) -> io::Result<Self> {
        let cwd = sys.current_dir()?;
        Ok(Shell { sys, cwd })
    }

    /// Starts a session in `cwd`, moving `sys` there as well so builtins and
    /// external commands agree on where they run.
    pub fn with_cwd(mut sys: S, cwd: impl Into<PathBuf>) -> io::Result<Self> {
        let cwd = cwd.into();
        sys.set_current_dir(&cwd)?;
        Ok(Shell { sys, cwd })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn system(&self) -> &S {
        &self.sys
    }

    /// Reads, tokenizes and dispatches lines until `exit` or end of input.
    ///
    /// Returns the exit code the process should end with. Only a failure to read
    /// input stops the loop with an error; everything else is reported on `err`
    /// and the loop goes on.
    pub fn repl<L, W, E>(
        &mut self,
        input: &mut L,
        prompt: &str,
        mut out: W,
        mut err: E,
    ) -> Result<i32, ShellError>
    where
        L: LineSource + ?Sized,
        W: Write,
        E: Write,
    {
        loop {
            let line = match input.read_line(prompt).map_err(ShellError::Input)? {
                Some(line) => line,
                None => return Ok(0),
            };

            if let ShellStatus::Exit(code) = self.execute_line(&line, &mut out, &mut err) {
                return Ok(code);
            }
        }
    }

    /// Tokenizes a single input line and dispatches it.
    pub fn execute_line<W: Write, E: Write>(&mut self, line: &str, out: W, err: E) -> ShellStatus {
        let tokens = tokenize(line);
        self.dispatch(&tokens, out, err)
    }

    /// Orchestrates command execution.
    ///
    /// The first token is looked up as a `Builtin` first. If that fails, it is
    /// searched for as an executable in the `PATH` and run with the remaining
    /// tokens as its arguments. An empty token list does nothing.
    pub fn dispatch<W: Write, E: Write>(
        &mut self,
        tokens: &[String],
        mut out: W,
        mut err: E,
    ) -> ShellStatus {
        let Some((command, args)) = tokens.split_first() else {
            return ShellStatus::Continue;
        };

        let result = match command.parse::<Builtin>() {
            Ok(builtin) => builtin.execute(&mut self.sys, &mut self.cwd, args, &mut out),
            Err(()) => self.run_external(command, args, &mut out),
        };

        match result {
            Ok(status) => status,
            Err(e) => {
                let _ = writeln!(err, "{}", e);
                ShellStatus::Continue
            }
        }
    }

    fn run_external<W: Write>(
        &mut self,
        command: &str,
        args: &[String],
        out: &mut W,
    ) -> Result<ShellStatus, ShellError> {
        let Some(program) = find_executable(&self.sys, command) else {
            let _ = writeln!(out, "{}: command not found", command);
            return Ok(ShellStatus::Continue);
        };

        let output = self
            .sys
            .run(&program, command, args, &self.cwd)
            .map_err(|source| {
                warn!(command, error = %source, "failed to launch");
                ShellError::Launch {
                    name: command.to_string(),
                    source,
                }
            })?;

        if !output.success() {
            debug!(command, code = ?output.code, "command exited unsuccessfully");
        }
        let _ = out.write_all(&output.stdout);
        let _ = out.flush();
        Ok(ShellStatus::Continue)
    }
}
