use serde::Serialize;

/// Read-only view of one filesystem location. `size` is the byte length for
/// files and 0 for directories; directory totals are computed on demand by
/// the renderer, never stored here.
#[derive(Debug, Serialize, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub kind: FileKind,
    pub size: u64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Dir,
}

/// Recursive snapshot of a rendered tree, for JSON output. `size` here is
/// the accumulated total, unlike `FileEntry::size`.
#[derive(Debug, Serialize)]
pub struct FileNode {
    pub name: String,
    pub kind: FileKind,
    pub size: u64,
    pub children: Vec<FileNode>,
}
