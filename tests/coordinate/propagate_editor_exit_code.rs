use crate::common::command::{
    FakeEditor, fake_editor, repository_dir, run_vimdifftab_command, tmp_dir,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::leftover_sessions;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn propagate_editor_exit_code(
    repository_dir: TempDir,
    tmp_dir: TempDir,
    fake_editor: FakeEditor,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one changed\n".to_string(),
    ));
    let editor = fake_editor.program().to_string_lossy().into_owned();

    run_vimdifftab_command(
        repository_dir.path(),
        tmp_dir.path(),
        &["--editor", &editor],
    )
    .env("FAKE_EDITOR_STATUS", "3")
    .assert()
    .code(3);

    assert!(fake_editor.was_started());
    assert!(leftover_sessions(tmp_dir.path()).is_empty());

    Ok(())
}
