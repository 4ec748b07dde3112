//! Editor script generation
//!
//! The script opens one tab per record and runs a diff split inside it.
//! Every block has the same five commands:
//!
//! ```text
//! tabnew
//! silent edit <new>
//! filetype detect
//! silent vertical diffsplit <old>
//! filetype detect
//! ```
//!
//! After the last block the script jumps back to the first tab and wipes
//! the empty buffer the editor started with.

use crate::artifacts::core::ex_escape;
use crate::artifacts::record::Record;
use crate::config::Layout;
use std::path::{Path, PathBuf};

const TRAILER: [&str; 2] = ["tabfirst", "bd"];

#[derive(Debug)]
pub struct EditorScript {
    layout: Layout,
    /// Prepended to relative record paths
    prefix: Option<PathBuf>,
    body: String,
    blocks: usize,
}

impl EditorScript {
    pub fn new(layout: Layout, prefix: Option<PathBuf>) -> Self {
        EditorScript {
            layout,
            prefix,
            body: String::new(),
            blocks: 0,
        }
    }

    pub fn push(&mut self, record: &Record) {
        let new_path = self.resolve(&record.new_path);
        let old_path = self.resolve(&record.old_path);

        self.body.push_str("tabnew\n");
        self.body
            .push_str(&format!("silent edit {}\n", ex_escape(&new_path)));
        self.body.push_str("filetype detect\n");
        self.body.push_str(&format!(
            "silent {} {}\n",
            self.split_command(),
            ex_escape(&old_path)
        ));
        self.body.push_str("filetype detect\n");

        self.blocks += 1;
    }

    pub fn extend<'r>(&mut self, records: impl IntoIterator<Item = &'r Record>) {
        records.into_iter().for_each(|record| self.push(record));
    }

    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    pub fn finish(mut self) -> String {
        TRAILER.iter().for_each(|command| {
            self.body.push_str(command);
            self.body.push('\n');
        });

        self.body
    }

    fn split_command(&self) -> &'static str {
        match self.layout {
            Layout::Vertical => "vertical diffsplit",
            Layout::Stacked => "diffsplit",
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.prefix {
            Some(prefix) if path.is_relative() => prefix.join(path),
            _ => path.to_path_buf(),
        }
    }
}
