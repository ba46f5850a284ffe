/// Replaces every occurrence of `from` with `to`.
///
/// Returns `None` when `from` does not occur, so callers can skip the write.
/// An empty `from` never matches.
pub fn replace_literal(content: &str, from: &str, to: &str) -> Option<(String, usize)> {
    if from.is_empty() {
        return None;
    }
    let hits = content.matches(from).count();
    if hits == 0 {
        return None;
    }
    Some((content.replace(from, to), hits))
}
