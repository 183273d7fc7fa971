use crate::models::file_entry::{FileEntry, FileKind};

/// Orders a directory's direct children: directories before files, then
/// case-insensitive by full path string. `to_lowercase` is Unicode case
/// folding, so the ordering does not depend on the platform locale.
pub(crate) fn siblings(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        let a_is_file = a.kind != FileKind::Dir;
        let b_is_file = b.kind != FileKind::Dir;

        match a_is_file.cmp(&b_is_file) {
            std::cmp::Ordering::Equal => a.path.to_lowercase().cmp(&b.path.to_lowercase()),
            kind_order => kind_order,
        }
    });
}
