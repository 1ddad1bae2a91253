use minsh::system::{FileStat, OsSystem, ProcessOutput, System};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Real operating system, except for a `PATH` chosen by the test.
pub struct IsolatedPath {
    pub path: OsString,
    pub os: OsSystem,
}

impl IsolatedPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(|d| d.as_ref().to_path_buf()).collect();
        IsolatedPath {
            path: std::env::join_paths(dirs).unwrap(),
            os: OsSystem,
        }
    }
}

impl System for IsolatedPath {
    fn var(&self, name: &str) -> Option<OsString> {
        if name == "PATH" {
            Some(self.path.clone())
        } else {
            self.os.var(name)
        }
    }

    fn metadata(&self, path: &Path) -> io::Result<FileStat> {
        self.os.metadata(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.os.current_dir()
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        self.os.set_current_dir(path)
    }

    fn run(
        &mut self,
        program: &Path,
        name: &str,
        args: &[String],
        cwd: &Path,
    ) -> io::Result<ProcessOutput> {
        self.os.run(program, name, args, cwd)
    }
}

pub fn write_file(path: &Path, contents: &str, mode: u32) {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}
