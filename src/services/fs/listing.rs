use crate::core::errors::Result;
use crate::models::file_entry::{FileEntry, FileKind};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Reports whether `path` is a regular file, a directory, or neither.
/// Symlinks are resolved before classification; special files (sockets,
/// devices) and unreadable paths classify as neither.
pub fn classify(path: &Path) -> Option<FileKind> {
    let md = fs::metadata(path).ok()?;
    if md.is_dir() {
        Some(FileKind::Dir)
    } else if md.is_file() {
        Some(FileKind::File)
    } else {
        None
    }
}

/// Byte length of a regular file, or 0 when it cannot be read.
pub fn byte_length(path: &Path) -> u64 {
    fs::metadata(path).map(|md| md.len()).unwrap_or(0)
}

/// Builds the entry for `path` itself, or `None` if it is neither a file
/// nor a directory.
pub fn entry_at(path: &Path) -> Option<FileEntry> {
    let kind = classify(path)?;
    let name = path
        .file_name()
        .map(os_str_to_string)
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let size = match kind {
        FileKind::File => byte_length(path),
        FileKind::Dir => 0,
    };
    Some(FileEntry {
        name,
        path: path.to_string_lossy().into_owned(),
        kind,
        size,
    })
}

/// Lists a directory's direct children, unordered. Entries that are neither
/// files nor directories are skipped.
pub fn list_children(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(kind) = classify(&path) else {
            continue;
        };
        let size = match kind {
            FileKind::File => byte_length(&path),
            FileKind::Dir => 0,
        };
        children.push(FileEntry {
            name: os_str_to_string(entry.file_name()),
            path: path.to_string_lossy().into_owned(),
            kind,
            size,
        });
    }
    Ok(children)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
