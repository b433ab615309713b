/// Map a raw display name onto a string safe to use as a single path
/// component.
///
/// A pure per-character map: alphanumerics and `.`, `_`, `-`, space pass
/// through unchanged, every other character becomes `_`. Length and order
/// are preserved; runs are never collapsed. Uniqueness among siblings is
/// resolved later against the filesystem, not here.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
