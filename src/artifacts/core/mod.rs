//! Core utilities and shared types
//!
//! Quoting helpers for the two interpreters this tool hands paths to:
//! the POSIX shell that evaluates the difftool external command, and the
//! editor's Ex command line that reads the generated script.

use std::path::Path;

/// Characters the editor's `fnameescape()` protects with a backslash
const EX_SPECIAL_CHARS: &str = " \t*?[{`$\\%#'\"|!<";

/// Escape a path for use as the file argument of an Ex command
/// (`:edit`, `:diffsplit`, `:source`).
///
/// Follows the editor's own `fnameescape()`: special characters get a
/// backslash, and a leading `+`, `-` or `>` is escaped so it is not read as
/// a command modifier.
pub fn ex_escape(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut escaped = String::with_capacity(raw.len() + 8);

    for (i, c) in raw.chars().enumerate() {
        let leading_modifier = i == 0 && matches!(c, '+' | '-' | '>');
        if leading_modifier || EX_SPECIAL_CHARS.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// Single-quote a path for a POSIX shell.
///
/// git evaluates `--extcmd` through the shell, so the path of this
/// executable must survive word splitting and expansion.
pub fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', r"'\''"))
}
