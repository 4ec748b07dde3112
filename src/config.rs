//! Runtime configuration
//!
//! Every knob can be given on the command line or through an environment
//! variable, so git aliases and shell profiles can pin them:
//!
//! - `GIT_VIMDIFFTAB_EDITOR`: editor program (default `vim`)
//! - `GIT_VIMDIFFTAB_GIT`: git program (default `git`)
//! - `GIT_VIMDIFFTAB_LAYOUT`: `vertical` or `stacked` diff split
//! - `GIT_VIMDIFFTAB_PATHS`: `repo-root` or `as-recorded` path resolution
//! - `GIT_VIMDIFFTAB_LOG`: tracing filter directives (default `warn`)
//!
//! `GIT_VIMDIFFTAB` itself is not a setting: it carries the manifest path
//! from the coordinator to the recorders git spawns.

use clap::ValueEnum;
use derive_new::new;
use std::ffi::OsString;

/// Carries the manifest path across the difftool process boundary
pub const MANIFEST_ENV: &str = "GIT_VIMDIFFTAB";

pub const EDITOR_ENV: &str = "GIT_VIMDIFFTAB_EDITOR";
pub const GIT_ENV: &str = "GIT_VIMDIFFTAB_GIT";
pub const LAYOUT_ENV: &str = "GIT_VIMDIFFTAB_LAYOUT";
pub const PATHS_ENV: &str = "GIT_VIMDIFFTAB_PATHS";
pub const LOG_ENV: &str = "GIT_VIMDIFFTAB_LOG";

pub const DEFAULT_EDITOR: &str = "vim";
pub const DEFAULT_GIT: &str = "git";

/// How the two sides of a diff share a tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Side by side
    #[default]
    Vertical,
    /// One above the other
    Stacked,
}

/// How relative paths recorded by git are resolved
///
/// git runs the external command from the top of the work tree, so a
/// relative path it reports only resolves from the coordinator's working
/// directory when both are the repository root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PathMode {
    /// Prefix relative paths with the way back to the repository root
    #[default]
    RepoRoot,
    /// Use recorded paths verbatim
    AsRecorded,
}

#[derive(Debug, Clone, new)]
pub struct Settings {
    pub git: OsString,
    pub editor: OsString,
    pub layout: Layout,
    pub path_mode: PathMode,
    /// Write the script to the output instead of launching the editor
    pub print_script: bool,
    /// Forwarded verbatim to `git difftool`
    pub passthrough: Vec<OsString>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(
            DEFAULT_GIT.into(),
            DEFAULT_EDITOR.into(),
            Layout::default(),
            PathMode::default(),
            false,
            Vec::new(),
        )
    }
}
