use crate::areas::manifest::Manifest;
use crate::areas::session_dir::SessionDir;
use crate::artifacts::core::{ex_escape, shell_quote};
use crate::artifacts::invocation::SelfPath;
use crate::artifacts::script::EditorScript;
use crate::config::{MANIFEST_ENV, PathMode, Settings};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};
use tracing::{debug, info};

/// Parent side of the session: drives git difftool, then the editor
pub struct Coordinator {
    settings: Settings,
    self_path: Box<dyn SelfPath>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Coordinator {
    pub fn new(
        settings: Settings,
        self_path: Box<dyn SelfPath>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Coordinator {
            settings,
            self_path,
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Run one diff session and return the exit code for this process.
    ///
    /// The session directory is released when it goes out of scope, so
    /// every early return below leaves nothing behind.
    pub fn run(&self) -> anyhow::Result<ExitCode> {
        // refuse before touching git: a broken --extcmd would record nothing
        let self_path = self.self_path.self_path()?;

        let session = SessionDir::create()?;
        let manifest = Manifest::create(session.manifest_path().into_boxed_path())?;

        self.run_difftool(&self_path, manifest.path())?;

        let prefix = match self.settings.path_mode {
            PathMode::RepoRoot => self.repo_root_prefix()?,
            PathMode::AsRecorded => None,
        };
        let records = manifest.read_records()?;
        info!(files = records.len(), "git difftool finished");

        let mut script = EditorScript::new(self.settings.layout, prefix);
        script.extend(&records);

        if self.settings.print_script {
            write!(self.writer(), "{}", script.finish())?;
            self.writer().flush()?;
            session.close()?;
            return Ok(ExitCode::SUCCESS);
        }

        if script.is_empty() {
            info!("no changed files, not starting the editor");
            session.close()?;
            return Ok(ExitCode::SUCCESS);
        }

        let script_path = session.script_path();
        std::fs::write(&script_path, script.finish())
            .with_context(|| format!("failed to write editor script {:?}", script_path))?;

        let status = self.run_editor(&script_path)?;
        session.close()?;

        Ok(exit_code(status))
    }

    fn run_difftool(&self, self_path: &Path, manifest_path: &Path) -> anyhow::Result<()> {
        if self_path.to_str().is_none() {
            anyhow::bail!("executable path is not valid UTF-8: {:?}", self_path);
        }
        let mut extcmd = OsString::from("--extcmd=");
        extcmd.push(shell_quote(self_path));

        let mut difftool = Command::new(&self.settings.git);
        difftool
            .arg("difftool")
            .arg("--no-prompt")
            .arg(extcmd)
            .args(&self.settings.passthrough)
            .env(MANIFEST_ENV, manifest_path);

        debug!(command = ?difftool, "running git difftool");

        let status = difftool
            .status()
            .with_context(|| format!("failed to run {:?}", self.settings.git))?;
        if !status.success() {
            anyhow::bail!("git difftool failed: {}", status);
        }

        Ok(())
    }

    /// Path from the current directory back to the top of the work tree,
    /// `None` when already there.
    fn repo_root_prefix(&self) -> anyhow::Result<Option<PathBuf>> {
        let output = Command::new(&self.settings.git)
            .args(["rev-parse", "--show-cdup"])
            .output()
            .with_context(|| format!("failed to run {:?}", self.settings.git))?;

        if !output.status.success() {
            anyhow::bail!(
                "git rev-parse --show-cdup failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let cdup = String::from_utf8(output.stdout)
            .context("git rev-parse --show-cdup printed invalid UTF-8")?;
        let cdup = cdup.trim();
        debug!(cdup, "resolved repository root");

        Ok((!cdup.is_empty()).then(|| PathBuf::from(cdup)))
    }

    fn run_editor(&self, script_path: &Path) -> anyhow::Result<ExitStatus> {
        let mut editor = Command::new(&self.settings.editor);
        editor
            .arg("-R")
            .arg("--cmd")
            .arg(format!("au VimEnter * so {}", ex_escape(script_path)));

        info!(command = ?editor, "starting editor");

        editor
            .status()
            .with_context(|| format!("failed to run editor {:?}", self.settings.editor))
    }
}

fn exit_code(status: ExitStatus) -> ExitCode {
    // killed by a signal: no code to pass on
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
