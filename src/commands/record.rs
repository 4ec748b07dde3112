use crate::areas::manifest::Manifest;
use crate::areas::session_dir::adopt_file;
use crate::artifacts::record::Record;
use derive_new::new;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Child side of the session: one invocation per changed file
#[derive(Debug, new)]
pub struct Recorder {
    manifest: Manifest,
}

impl Recorder {
    /// Append one (old, new) pair, first copying any of git's temporary
    /// files next to the manifest so they survive this process.
    pub fn record(&self, old_path: &Path, new_path: &Path) -> anyhow::Result<Record> {
        let dir = self.manifest.dir()?;
        let record = Record::new(adopt_file(dir, old_path)?, adopt_file(dir, new_path)?);

        self.manifest.append(&record)?;

        debug!(
            old = %record.old_path.display(),
            new = %record.new_path.display(),
            "recorded changed file"
        );

        Ok(record)
    }
}

/// Take the (old, new) pair git difftool passes to its external command.
///
/// Arguments are file names, never options: `-h` or `--` is a changed file
/// like any other, so nothing here is interpreted.
pub fn record_paths(
    args: impl IntoIterator<Item = OsString>,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let mut args = args.into_iter().map(PathBuf::from);

    match (args.next(), args.next(), args.next()) {
        (Some(old_path), Some(new_path), None) => Ok((old_path, new_path)),
        _ => anyhow::bail!("expected exactly two paths: <old> <new>"),
    }
}
