use super::{prefix, size, sort};
use crate::models::file_entry::{FileEntry, FileKind};
use crate::services::fs::listing;
use std::path::Path;

pub(crate) fn label(entry: &FileEntry) -> String {
    format!("{} {} bytes", entry.name, size::of(entry))
}

/// Appends a directory's label and its recursively rendered children to
/// `out`. `ancestors` holds one last-sibling flag per enclosing directory;
/// each descent passes a fresh extended copy, so no push/pop bookkeeping
/// survives across calls.
pub(crate) fn directory(dir: &FileEntry, ancestors: &[bool], out: &mut String) {
    out.push_str(&label(dir));

    let mut children = match listing::list_children(Path::new(&dir.path)) {
        Ok(children) => children,
        Err(e) => {
            // Unreadable listings render as empty, matching the size
            // accumulator's zero-total for the same directory.
            tracing::debug!("listing {} failed, rendering as empty: {}", dir.path, e);
            Vec::new()
        }
    };
    sort::siblings(&mut children);

    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        out.push('\n');
        out.push_str(&prefix::line_prefix(ancestors));
        out.push_str(prefix::connector(is_last));
        match child.kind {
            FileKind::Dir => {
                let mut child_ancestors = ancestors.to_vec();
                child_ancestors.push(is_last);
                directory(child, &child_ancestors, out);
            }
            FileKind::File => out.push_str(&label(child)),
        }
    }
}
