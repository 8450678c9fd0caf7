/// Collapse runs of whitespace into single spaces and trim both ends.
///
/// Multi-word keyword phrases survive intact: `"  bad   phrase "` becomes `"bad phrase"`.
pub fn normalize_phrase(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
