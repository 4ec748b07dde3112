use crate::common::file::{FileSpec, write_file};
use crate::common::recorder::{Session, run_recorder_command, session};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn copy_absolute_paths_into_session_dir(
    session: Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let git_tmp = assert_fs::TempDir::new()?;
    let temp_file = git_tmp.path().join("a.txt.orig");
    write_file(FileSpec::new(temp_file.clone(), "one\n".to_string()));
    let temp_file = temp_file.to_string_lossy().into_owned();

    run_recorder_command(git_tmp.path(), &session.manifest, &[&temp_file, "a.txt"])
        .assert()
        .success()
        .stdout("");
    // git deletes its temp files once the external command returns
    git_tmp.close()?;

    let copy = session.dir.path().join("a.txt.orig");
    assert_eq!(
        session.manifest_content(),
        format!("{}\na.txt\n", copy.display())
    );
    assert_eq!(std::fs::read_to_string(copy)?, "one\n");

    Ok(())
}

#[rstest]
fn keep_both_copies_when_base_names_clash(
    session: Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let git_tmp = assert_fs::TempDir::new()?;
    let old_side = git_tmp.path().join("old").join("mod.rs");
    let new_side = git_tmp.path().join("new").join("mod.rs");
    write_file(FileSpec::new(old_side.clone(), "old\n".to_string()));
    write_file(FileSpec::new(new_side.clone(), "new\n".to_string()));
    let old_side = old_side.to_string_lossy().into_owned();
    let new_side = new_side.to_string_lossy().into_owned();

    run_recorder_command(git_tmp.path(), &session.manifest, &[&old_side, &new_side])
        .assert()
        .success();

    let old_copy = session.dir.path().join("mod.rs");
    let new_copy = session.dir.path().join("dup-1").join("mod.rs");
    assert_eq!(
        session.manifest_content(),
        format!("{}\n{}\n", old_copy.display(), new_copy.display())
    );
    assert_eq!(std::fs::read_to_string(old_copy)?, "old\n");
    assert_eq!(std::fs::read_to_string(new_copy)?, "new\n");

    Ok(())
}
