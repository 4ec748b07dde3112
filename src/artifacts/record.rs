use derive_new::new;
use std::path::PathBuf;

/// One changed file as reported by git difftool
///
/// Stored in the manifest as two lines, old side first.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Record {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}
