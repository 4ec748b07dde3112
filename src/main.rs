use clap::Parser;
use colored::Colorize;
use git_vimdifftab::areas::manifest::Manifest;
use git_vimdifftab::artifacts::invocation::ArgvSelfPath;
use git_vimdifftab::artifacts::mode::Mode;
use git_vimdifftab::commands::coordinate::Coordinator;
use git_vimdifftab::commands::record::{Recorder, record_paths};
use git_vimdifftab::config::{
    DEFAULT_EDITOR, DEFAULT_GIT, EDITOR_ENV, GIT_ENV, LAYOUT_ENV, LOG_ENV, Layout, PATHS_ENV,
    PathMode, Settings,
};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-vimdifftab",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Use vimdiff with git, diffing each file in its own tab",
    long_about = "Runs git difftool with this program as the external diff command, \
    collects every changed file and opens them all in one read-only editor session, \
    one diff tab per file. Any arguments not recognised here are passed to git difftool.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, env = EDITOR_ENV, default_value = DEFAULT_EDITOR, help = "Editor to open the diffs in")]
    editor: OsString,
    #[arg(long, env = GIT_ENV, default_value = DEFAULT_GIT, help = "git executable to run")]
    git: OsString,
    #[arg(
        long,
        env = LAYOUT_ENV,
        value_enum,
        default_value_t = Layout::Vertical,
        help = "Split each tab side by side or one above the other"
    )]
    layout: Layout,
    #[arg(
        long,
        env = PATHS_ENV,
        value_enum,
        default_value_t = PathMode::RepoRoot,
        help = "Resolve work tree paths from the repository root or use them as recorded"
    )]
    paths: PathMode,
    #[arg(long, help = "Print the editor script instead of starting the editor")]
    print_script: bool,
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments for git difftool, e.g. a revision range"
    )]
    difftool_args: Vec<OsString>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings::new(
            cli.git,
            cli.editor,
            cli.layout,
            cli.paths,
            cli.print_script,
            cli.difftool_args,
        )
    }
}

fn main() -> ExitCode {
    init_logging();

    let outcome = match Mode::from_env() {
        Mode::Record { manifest } => record(&manifest),
        Mode::Coordinate => coordinate(),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn record(manifest: &Path) -> anyhow::Result<ExitCode> {
    tracing::debug!(manifest = %manifest.display(), "recording changed file");

    let (old_path, new_path) = record_paths(std::env::args_os().skip(1))?;
    let recorder = Recorder::new(Manifest::new(manifest.into()));
    recorder.record(&old_path, &new_path)?;

    Ok(ExitCode::SUCCESS)
}

fn coordinate() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let coordinator = Coordinator::new(
        cli.into(),
        Box::new(ArgvSelfPath::from_env()),
        Box::new(std::io::stdout()),
    );

    coordinator.run()
}

// Logs go to stderr: recorders share stdout with git difftool.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
