use std::path::{Path, PathBuf};

/// Resolve `candidate` to a path that does not currently exist, appending
/// `_1`, `_2`, ... to the final path component until one is free.
///
/// The probe runs against live filesystem state, so directories surviving
/// from earlier runs are respected. A name that already ends in `_<n>` is
/// suffixed again (`Foo_1` collides into `Foo_1_1`). Check-then-create is
/// not atomic; the extractor assumes it is the sole writer under the
/// output root.
pub fn unique_path(candidate: PathBuf) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }
    let mut n = 1u32;
    loop {
        let probe = suffixed(&candidate, n);
        if !probe.exists() {
            return probe;
        }
        n += 1;
    }
}

fn suffixed(base: &Path, n: u32) -> PathBuf {
    let mut name = base
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(&format!("_{n}"));
    match base.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
