// Collapse grouped summaries into one research summary

const SEPARATOR: &str = "\n\n";

/// Join each group with a blank line, then join the groups the same way.
/// Repeated content is kept as is.
pub fn aggregate(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| group.join(SEPARATOR))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
