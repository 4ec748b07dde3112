//! Values passed between the two roles
//!
//! - `core`: quoting for the shell and for Ex command lines
//! - `invocation`: resolving this executable for the difftool callback
//! - `mode`: recorder versus coordinator
//! - `record`: one (old, new) pair from git difftool
//! - `script`: the editor script built from the records

pub mod core;
pub mod invocation;
pub mod mode;
pub mod record;
pub mod script;
