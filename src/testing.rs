use crate::system::{FileStat, ProcessOutput, System};
use bytes::Bytes;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One recorded call to [`System::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub program: PathBuf,
    pub name: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

#[derive(Debug, Default)]
pub(crate) struct FakeSystem {
    vars: HashMap<String, OsString>,
    files: HashMap<PathBuf, FileStat>,
    cwd: Option<PathBuf>,
    /// Makes `current_dir` fail, as if the directory had been deleted.
    pub cwd_removed: bool,
    pub chdir_error: Option<io::ErrorKind>,
    pub launch_error: Option<io::ErrorKind>,
    pub output: ProcessOutput,
    pub invocations: Vec<Invocation>,
}

impl FakeSystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let mut files = HashMap::new();
        files.insert(cwd.clone(), FileStat { is_dir: true, mode: 0o755 });
        FakeSystem {
            files,
            cwd: Some(cwd),
            output: ProcessOutput {
                stdout: Bytes::new(),
                code: Some(0),
            },
            ..FakeSystem::default()
        }
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.set_var(name, value);
        self
    }

    pub fn set_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.into());
    }

    pub fn with_file(mut self, path: &str, mode: u32) -> Self {
        self.files.insert(path.into(), FileStat { is_dir: false, mode });
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.files.insert(path.into(), FileStat { is_dir: true, mode: 0o755 });
        self
    }

    pub fn without_cwd(mut self) -> Self {
        self.cwd_removed = true;
        self
    }

    pub fn with_output(mut self, stdout: &'static [u8], code: Option<i32>) -> Self {
        self.output = ProcessOutput {
            stdout: Bytes::from_static(stdout),
            code,
        };
        self
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl System for FakeSystem {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }

    fn metadata(&self, path: &Path) -> io::Result<FileStat> {
        self.files
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        match &self.cwd {
            Some(cwd) if !self.cwd_removed => Ok(cwd.clone()),
            _ => Err(io::Error::other("current directory was removed")),
        }
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        if let Some(kind) = self.chdir_error {
            return Err(io::Error::from(kind));
        }
        self.cwd = Some(path.to_path_buf());
        Ok(())
    }

    fn run(
        &mut self,
        program: &Path,
        name: &str,
        args: &[String],
        cwd: &Path,
    ) -> io::Result<ProcessOutput> {
        if let Some(kind) = self.launch_error {
            return Err(io::Error::from(kind));
        }
        self.invocations.push(Invocation {
            program: program.to_path_buf(),
            name: name.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        Ok(self.output.clone())
    }
}
