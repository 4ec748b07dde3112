use crate::config::MANIFEST_ENV;
use std::ffi::OsString;
use std::path::PathBuf;

/// The role of this invocation
///
/// The coordinator hands the manifest path to its descendants through
/// [`MANIFEST_ENV`]; the environment is only the transport, the decision is
/// made once, here, and passed around as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Child spawned by git difftool for one changed file
    Record { manifest: PathBuf },
    /// Top-level invocation driving git and the editor
    Coordinate,
}

impl Mode {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(MANIFEST_ENV))
    }

    pub fn from_value(value: Option<OsString>) -> Self {
        match value {
            Some(manifest) if !manifest.is_empty() => Mode::Record {
                manifest: PathBuf::from(manifest),
            },
            _ => Mode::Coordinate,
        }
    }
}
