use crate::system::System;
use std::env;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Searches the `PATH` for an executable with the given name.
///
/// Directories are tried in order and the first regular file with any execute
/// bit set wins. `PATH` is read again on every call, so changes made during a
/// session are picked up by the next lookup.
pub fn find_executable<S: System + ?Sized>(sys: &S, name: &str) -> Option<PathBuf> {
    let path_var = sys.var("PATH")?;

    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(name);
        match sys.metadata(&candidate) {
            Ok(stat) if !stat.is_dir && stat.is_executable() => {
                debug!(name, path = %candidate.display(), "resolved executable");
                return Some(candidate);
            }
            Ok(stat) => {
                trace!(path = %candidate.display(), mode = stat.mode, "skipping non-executable");
            }
            Err(_) => {}
        }
    }
    None
}
