pub(crate) const BRANCH: &str = "├─ ";
pub(crate) const LAST_BRANCH: &str = "└─ ";
pub(crate) const VERTICAL: &str = "│  ";
pub(crate) const BLANK: &str = "   ";

/// Builds the line prefix for an entry from its ancestors' last-sibling
/// flags: ancestors that were last in their own directory contribute a
/// blank segment, the rest a vertical continuation.
pub(crate) fn line_prefix(ancestors: &[bool]) -> String {
    let mut prefix = String::with_capacity(ancestors.len() * VERTICAL.len());
    for &was_last in ancestors {
        prefix.push_str(if was_last { BLANK } else { VERTICAL });
    }
    prefix
}

pub(crate) fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}
