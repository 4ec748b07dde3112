//! Shared manifest of changed files
//!
//! The coordinator creates the manifest empty, every recorder appends one
//! record, and the coordinator reads it back once git difftool exits.
//!
//! ## File Format
//!
//! One path per line, newline terminated, grouped in pairs:
//!
//! ```text
//! <old path>
//! <new path>
//! ```
//!
//! Paths are written verbatim. A path containing a newline cannot be
//! represented and is refused instead of escaped.
//!
//! ## Locking
//!
//! git may run recorders concurrently. Each append takes an exclusive lock
//! and writes the whole record with a single write, so records never
//! interleave.

use crate::artifacts::record::Record;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Manifest {
    path: Box<Path>,
}

impl Manifest {
    /// Create a new, empty manifest; fails if the file already exists.
    pub fn create(path: Box<Path>) -> anyhow::Result<Self> {
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("failed to create manifest at {:?}", path))?;

        Ok(Manifest::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the manifest, shared with copied temp files
    pub fn dir(&self) -> anyhow::Result<&Path> {
        self.path
            .parent()
            .with_context(|| format!("manifest {:?} has no parent directory", self.path))
    }

    pub fn append(&self, record: &Record) -> anyhow::Result<()> {
        let entry = format!(
            "{}\n{}\n",
            Self::as_line(&record.old_path)?,
            Self::as_line(&record.new_path)?
        );

        // open the manifest as WRONLY and APPEND, never creating it: a missing
        // file means the coordinator is gone
        let mut manifest_file = std::fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open manifest at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut manifest_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock manifest at {:?}", self.path))?;
        lock.deref_mut().write_all(entry.as_bytes())?;

        Ok(())
    }

    pub fn read_records(&self) -> anyhow::Result<Vec<Record>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read manifest at {:?}", self.path))?;

        parse_records(&content)
    }

    fn as_line(path: &Path) -> anyhow::Result<&str> {
        let line = path
            .to_str()
            .with_context(|| format!("path is not valid UTF-8: {:?}", path))?;

        if line.contains('\n') {
            anyhow::bail!("file names containing newlines are not supported: {:?}", path);
        }

        Ok(line)
    }
}

fn parse_records(content: &str) -> anyhow::Result<Vec<Record>> {
    let lines = content.split_terminator('\n').collect::<Vec<_>>();
    let mut pairs = lines.chunks_exact(2);

    let records = pairs
        .by_ref()
        .map(|pair| Record::new(PathBuf::from(pair[0]), PathBuf::from(pair[1])))
        .collect::<Vec<_>>();

    let leftover = pairs.remainder();
    if !leftover.is_empty() {
        anyhow::bail!("Unexpected line(s):\n{}", leftover.join("\n"));
    }

    Ok(records)
}
