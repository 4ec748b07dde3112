//! Open every changed file of a git diff in its own vimdiff tab.
//!
//! `git difftool` is run with this executable as its external command. Each
//! of those child invocations records one (old, new) pair in a shared
//! manifest; once git is done, the parent turns the manifest into an editor
//! script with one diff tab per file and starts the editor on it.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
