//! On-disk resources of a diff session
//!
//! - `manifest`: the append-only list of changed file pairs
//! - `session_dir`: the private temp directory owning the manifest, copies
//!   of git's temporary files and the editor script

pub mod manifest;
pub mod session_dir;
