//! The two roles of the executable
//!
//! - `coordinate`: the top-level invocation. Creates the session, runs
//!   `git difftool` with this executable as the external diff command,
//!   turns the manifest into an editor script and opens the editor.
//! - `record`: the per-file invocation made by `git difftool`. Appends one
//!   pair of paths to the manifest and exits.
//!
//! Both run from the same binary; [`crate::artifacts::mode::Mode`] picks one.

pub mod coordinate;
pub mod record;
