use crate::models::file_entry::{FileKind, FileNode};
use crate::services::fs::listing;
use std::path::Path;

mod compose;
mod prefix;
mod size;
mod sort;

/// Renders `path` as a tree diagram with per-entry sizes.
///
/// A regular file renders as its bare label (`name len bytes`, no newline).
/// A directory renders as its label followed by one line per descendant,
/// with connector glyphs encoding depth and sibling position. A path that
/// is neither yields `None`.
pub fn render(path: &Path) -> Option<String> {
    let root = listing::entry_at(path)?;
    let mut out = String::new();
    match root.kind {
        FileKind::File => out.push_str(&compose::label(&root)),
        FileKind::Dir => compose::directory(&root, &[], &mut out),
    }
    Some(out)
}

/// Builds the same tree as [`render`] as a serializable value: same
/// classification, same sibling ordering, same accumulated sizes.
pub fn snapshot(path: &Path) -> Option<FileNode> {
    let root = listing::entry_at(path)?;
    Some(node(&root))
}

fn node(entry: &crate::models::file_entry::FileEntry) -> FileNode {
    let children = match entry.kind {
        FileKind::Dir => {
            let mut children = listing::list_children(Path::new(&entry.path)).unwrap_or_default();
            sort::siblings(&mut children);
            children.iter().map(node).collect()
        }
        FileKind::File => Vec::new(),
    };
    FileNode {
        name: entry.name.clone(),
        kind: entry.kind,
        size: size::of(entry),
        children,
    }
}
