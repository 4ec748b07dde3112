use crate::common::command::BIN;
use crate::common::recorder::{Session, session};
use assert_cmd::prelude::CommandCargoExt;
use git_vimdifftab::config::MANIFEST_ENV;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::process::Command;

const RECORDERS: usize = 12;

#[rstest]
fn keep_records_whole_under_concurrent_recorders(
    session: Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let children = (0..RECORDERS)
        .map(|i| {
            Command::cargo_bin(BIN)?
                .current_dir(session.dir.path())
                .env(MANIFEST_ENV, &session.manifest)
                .arg(format!("old/file-{}.txt", i))
                .arg(format!("new/file-{}.txt", i))
                .spawn()
                .map_err(Box::<dyn std::error::Error>::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for mut child in children {
        assert!(child.wait()?.success());
    }

    let content = session.manifest_content();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2 * RECORDERS);

    let mut recorded = lines
        .chunks(2)
        .map(|pair| {
            let old = pair[0].trim_start_matches("old/");
            let new = pair[1].trim_start_matches("new/");
            assert_eq!(old, new, "record split across recorders");
            old.to_string()
        })
        .collect::<Vec<_>>();
    recorded.sort();

    let mut expected = (0..RECORDERS)
        .map(|i| format!("file-{}.txt", i))
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(recorded, expected);

    Ok(())
}
