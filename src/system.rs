use bytes::Bytes;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// The parts of a file's metadata the shell cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    /// Unix permission bits (`st_mode & 0o7777`).
    pub mode: u32,
}

impl FileStat {
    /// True if any of the owner, group or other execute bits is set.
    pub fn is_executable(&self) -> bool {
        self.mode & 0o111 != 0
    }
}

/// Captured result of running an external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Bytes,
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Operating system services used by the shell. Tests swap in a fake.
pub trait System {
    /// Reads an environment variable.
    fn var(&self, name: &str) -> Option<OsString>;

    /// Queries metadata for `path`, following symlinks. A missing path is an
    /// [`io::ErrorKind::NotFound`] error.
    fn metadata(&self, path: &Path) -> io::Result<FileStat>;

    /// The user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
    }

    fn current_dir(&self) -> io::Result<PathBuf>;

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Runs `program` to completion with `argv[0]` set to `name`, capturing
    /// its standard output.
    fn run(&mut self, program: &Path, name: &str, args: &[String], cwd: &Path)
    -> io::Result<ProcessOutput>;
}

/// [`System`] backed by the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSystem;

impl System for OsSystem {
    fn var(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat {
            is_dir: metadata.is_dir(),
            mode: metadata.permissions().mode() & 0o7777,
        })
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }

    fn run(
        &mut self,
        program: &Path,
        name: &str,
        args: &[String],
        cwd: &Path,
    ) -> io::Result<ProcessOutput> {
        let output = Command::new(program)
            .arg0(name)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()?;

        Ok(ProcessOutput {
            stdout: Bytes::from(output.stdout),
            code: output.status.code(),
        })
    }
}
