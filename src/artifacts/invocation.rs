//! Self-reference for the difftool callback
//!
//! git is told to run this very executable once per changed file, so the
//! coordinator needs a path it can hand over. Resolving that path sits
//! behind [`SelfPath`] so it can be swapped in tests.

use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::path::PathBuf;

/// argv[0] values left behind by interpreters and `sh -c` style wrappers
const INDIRECT_MARKERS: [&str; 2] = ["-c", "-"];

pub trait SelfPath {
    fn self_path(&self) -> anyhow::Result<PathBuf>;
}

/// Resolves the running executable, refusing indirect invocations.
#[derive(Debug, Clone, new)]
pub struct ArgvSelfPath {
    argv0: Option<OsString>,
}

impl ArgvSelfPath {
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().next())
    }

    pub fn is_direct(&self) -> bool {
        match self.argv0.as_deref() {
            Some(argv0) => {
                !argv0.is_empty() && !INDIRECT_MARKERS.iter().any(|marker| argv0 == *marker)
            }
            None => false,
        }
    }
}

impl SelfPath for ArgvSelfPath {
    fn self_path(&self) -> anyhow::Result<PathBuf> {
        if !self.is_direct() {
            anyhow::bail!("must be called directly, not run from an interpreter");
        }

        std::env::current_exe().context("failed to resolve the path of the running executable")
    }
}

/// A fixed path, for callers that already know where the executable lives.
#[derive(Debug, Clone, new)]
pub struct FixedSelfPath {
    path: PathBuf,
}

impl SelfPath for FixedSelfPath {
    fn self_path(&self) -> anyhow::Result<PathBuf> {
        Ok(self.path.clone())
    }
}
