use crate::common::command::{
    FakeEditor, fake_editor, repository_dir, run_vimdifftab_command, tmp_dir,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::leftover_sessions;
use crate::common::script::{count_tabs, diffed_files, edited_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn open_one_tab_per_changed_file(
    repository_dir: TempDir,
    tmp_dir: TempDir,
    fake_editor: FakeEditor,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one changed\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two changed\n".to_string(),
    ));

    let editor = fake_editor.program().to_string_lossy().into_owned();
    run_vimdifftab_command(
        repository_dir.path(),
        tmp_dir.path(),
        &["--editor", &editor],
    )
    .assert()
    .success()
    .stdout("");

    assert!(fake_editor.was_started());
    let args = fake_editor.args();
    assert_eq!(args[0], "-R");
    assert_eq!(args[1], "--cmd");
    assert!(args[2].starts_with("au VimEnter * so "));
    assert!(args[2].ends_with("session.vim"));

    let script = fake_editor.script();
    assert_eq!(count_tabs(&script), 2);
    assert_eq!(edited_files(&script), vec!["1.txt", "a/2.txt"]);
    assert!(script.ends_with("tabfirst\nbd\n"));

    // the old sides were git's temp files, copied into the session directory
    let session_dir = fake_editor.session_dir();
    let diffed = diffed_files(&script);
    assert_eq!(diffed.len(), 2);
    for (old_path, expected) in diffed.iter().zip(["one\n", "two\n"]) {
        assert_eq!(old_path.parent(), Some(session_dir.as_path()));
        let copy = fake_editor
            .session_snapshot()
            .join(old_path.file_name().expect("copy has a file name"));
        assert_eq!(std::fs::read_to_string(copy)?, expected);
    }
    assert!(diffed[0].to_string_lossy().ends_with("1.txt"));
    assert!(diffed[1].to_string_lossy().ends_with("2.txt"));

    assert!(!session_dir.exists());
    assert!(leftover_sessions(tmp_dir.path()).is_empty());

    Ok(())
}
