#![allow(dead_code)]


/// Session directories left behind in `tmp_dir`
pub fn leftover_sessions(tmp_dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(tmp_dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with("git-vimdifftab-"))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}
