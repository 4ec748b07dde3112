//! Private working directory of one diff session
//!
//! Holds the manifest, copies of git's temporary files, and the generated
//! editor script. The coordinator owns it; dropping [`SessionDir`] removes
//! it along with everything inside, whichever way the run ends.

use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

const SESSION_PREFIX: &str = "git-vimdifftab-";
const MANIFEST_NAME: &str = "session.manifest";
const SCRIPT_NAME: &str = "session.vim";
const NULL_DEVICE: &str = "/dev/null";

#[derive(Debug)]
pub struct SessionDir {
    dir: TempDir,
    /// Absolute even when `TMPDIR` is relative, since recorders run elsewhere
    path: PathBuf,
}

impl SessionDir {
    /// Create a fresh directory under the system temp dir, named after this process.
    pub fn create() -> anyhow::Result<Self> {
        let prefix = format!("{}{}-", SESSION_PREFIX, std::process::id());
        let dir = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir()
            .context("failed to create session directory")?;
        let path = std::path::absolute(dir.path())
            .with_context(|| format!("failed to resolve session directory {:?}", dir.path()))?;

        debug!(path = %path.display(), "created session directory");

        Ok(SessionDir { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_NAME)
    }

    pub fn script_path(&self) -> PathBuf {
        self.path.join(SCRIPT_NAME)
    }

    /// Remove the directory now, reporting failures that a drop would swallow.
    pub fn close(self) -> anyhow::Result<()> {
        let path = self.path;
        self.dir
            .close()
            .with_context(|| format!("failed to remove session directory {:?}", path))?;

        debug!(path = %path.display(), "removed session directory");

        Ok(())
    }
}

/// Make a path handed over by git outlive the process that handed it over.
///
/// Relative paths point into the work tree and are returned unchanged.
/// Absolute paths are git's temporary files, deleted as soon as the
/// recorder exits, so they are copied into `dir` under their base name.
/// When an earlier record already took that name, the copy goes to the
/// first free `dup-<n>` subdirectory instead, keeping the base name (and
/// with it filetype detection) intact.
pub fn adopt_file(dir: &Path, path: &Path) -> anyhow::Result<PathBuf> {
    if !path.is_absolute() || path == Path::new(NULL_DEVICE) {
        return Ok(path.to_path_buf());
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("temporary file {:?} has no file name", path))?;
    let mut source = std::fs::File::open(path)
        .with_context(|| format!("failed to open temporary file {:?}", path))?;
    let permissions = source.metadata()?.permissions();

    let mut target_dir = dir.to_path_buf();
    let mut attempt = 0;
    loop {
        let target = target_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut target_file) => {
                std::io::copy(&mut source, &mut target_file)
                    .with_context(|| format!("failed to copy {:?} to {:?}", path, target))?;
                target_file.set_permissions(permissions)?;

                debug!(from = %path.display(), to = %target.display(), "copied temporary file");

                return Ok(target);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                attempt += 1;
                target_dir = dir.join(format!("dup-{}", attempt));

                match std::fs::create_dir(&target_dir) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                    Err(e) => {
                        return Err(e).with_context(|| {
                            format!("failed to create directory {:?}", target_dir)
                        });
                    }
                }
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to create copy at {:?}", target));
            }
        }
    }
}
