use crate::models::file_entry::{FileEntry, FileKind};
use std::path::Path;
use walkdir::WalkDir;

/// Size of one entry: a file's byte length, or the sum of the byte lengths
/// of every file beneath a directory. Unreadable entries count as zero.
pub(crate) fn of(entry: &FileEntry) -> u64 {
    match entry.kind {
        FileKind::File => entry.size,
        FileKind::Dir => directory_total(Path::new(&entry.path)),
    }
}

fn directory_total(dir: &Path) -> u64 {
    // Links are followed so the walker counts the same file set the
    // classifier reports as children; walkdir drops cyclic link chains.
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|md| md.len())
        .sum()
}
