//! Header line lookup.

/// Value of the first `name: value` line matching `name` (ASCII
/// case-insensitive), trimmed. Status lines and blank lines are skipped.
pub fn header_value<'a>(lines: &'a [String], name: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let (k, v) = line.trim().split_once(':')?;
        if k.trim().eq_ignore_ascii_case(name) {
            Some(v.trim())
        } else {
            None
        }
    })
}
