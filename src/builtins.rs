use crate::ShellStatus;
use crate::error::ShellError;
use crate::path::find_executable;
use crate::system::System;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Enumeration of all supported builtin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Echo,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    /// Names of every builtin, in registry order.
    pub const NAMES: [&'static str; 5] = ["exit", "echo", "type", "pwd", "cd"];
}

impl FromStr for Builtin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exit" => Ok(Builtin::Exit),
            "echo" => Ok(Builtin::Echo),
            "type" => Ok(Builtin::Type),
            "pwd" => Ok(Builtin::Pwd),
            "cd" => Ok(Builtin::Cd),
            _ => Err(()),
        }
    }
}

impl Builtin {
    /// Executes the builtin command.
    ///
    /// `cwd` is the shell's working directory; only `cd` changes it. Errors are
    /// recoverable and are left to the caller to report.
    pub fn execute<S, W>(
        &self,
        sys: &mut S,
        cwd: &mut PathBuf,
        args: &[String],
        mut stdout: W,
    ) -> Result<ShellStatus, ShellError>
    where
        S: System + ?Sized,
        W: Write,
    {
        match self {
            Builtin::Exit => {
                let code = args
                    .first()
                    .and_then(|s| s.parse::<i32>().ok())
                    .unwrap_or(0);
                Ok(ShellStatus::Exit(code))
            }
            Builtin::Echo => {
                echo_cmd(args, &mut stdout);
                Ok(ShellStatus::Continue)
            }
            Builtin::Type => {
                type_cmd(&*sys, args, &mut stdout);
                Ok(ShellStatus::Continue)
            }
            Builtin::Pwd => {
                let path = sys.current_dir().map_err(ShellError::Pwd)?;
                let _ = writeln!(stdout, "{}", path.display());
                Ok(ShellStatus::Continue)
            }
            Builtin::Cd => {
                cd_cmd(sys, cwd, args)?;
                Ok(ShellStatus::Continue)
            }
        }
    }
}

/// Implementation of the `echo` command.
///
/// Prints the arguments to stdout, separated by spaces.
pub fn echo_cmd<W: Write>(args: &[String], writer: &mut W) {
    let _ = writeln!(writer, "{}", args.join(" "));
}

/// Implementation of the `type` command.
///
/// Identifies whether a command is a builtin or an executable in the PATH.
pub fn type_cmd<S: System + ?Sized, W: Write>(sys: &S, args: &[String], stdout: &mut W) {
    let Some(command) = args.first() else {
        return;
    };

    if Builtin::from_str(command).is_ok() {
        let _ = writeln!(stdout, "{} is a shell builtin", command);
        return;
    }

    match find_executable(sys, command) {
        Some(path) => {
            let _ = writeln!(stdout, "{} is {}", command, path.display());
        }
        None => {
            let _ = writeln!(stdout, "{} not found", command);
        }
    }
}

/// Implementation of the `cd` command.
///
/// `~` (or no argument) means the home directory. Relative targets are taken
/// from `cwd`, which is updated once the process directory has changed.
pub fn cd_cmd<S: System + ?Sized>(
    sys: &mut S,
    cwd: &mut PathBuf,
    args: &[String],
) -> Result<(), ShellError> {
    let typed = args.first().map(String::as_str);
    let target = match typed {
        None | Some("~") => sys.home_dir().ok_or(ShellError::HomeNotSet)?,
        Some(path) => PathBuf::from(path),
    };
    let shown = match typed {
        Some(path) => path.to_string(),
        None => target.display().to_string(),
    };
    let resolved = cwd.join(&target);

    match sys.metadata(&resolved) {
        Ok(stat) if stat.is_dir => {}
        Ok(_) => return Err(ShellError::NoSuchDirectory(shown)),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            return Err(ShellError::NoSuchDirectory(shown));
        }
        Err(source) => return Err(ShellError::ChangeDirectory { path: shown, source }),
    }

    sys.set_current_dir(&resolved)
        .map_err(|source| ShellError::ChangeDirectory { path: shown, source })?;
    *cwd = sys.current_dir().unwrap_or(resolved);
    debug!(cwd = %cwd.display(), "changed directory");
    Ok(())
}
