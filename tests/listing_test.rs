use anyhow::Result;
use dirtree::models::file_entry::FileKind;
use dirtree::render;
use dirtree::services::fs::listing::{byte_length, classify, entry_at, list_children};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn classify_distinguishes_files_directories_and_missing_paths() -> Result<()> {
    let tmp = tempdir()?;
    let file = tmp.path().join("f.txt");
    fs::write(&file, "data")?;

    assert_eq!(classify(&file), Some(FileKind::File));
    assert_eq!(classify(tmp.path()), Some(FileKind::Dir));
    assert_eq!(classify(&tmp.path().join("missing")), None);
    Ok(())
}

#[test]
fn byte_length_reports_content_size() -> Result<()> {
    let tmp = tempdir()?;
    let file = tmp.path().join("f.bin");
    fs::write(&file, [1u8, 2, 3, 4])?;

    assert_eq!(byte_length(&file), 4);
    assert_eq!(byte_length(Path::new("/definitely/not/a/real/path")), 0);
    Ok(())
}

#[test]
fn entry_at_fills_name_kind_and_size() -> Result<()> {
    let tmp = tempdir()?;
    let file = tmp.path().join("report.csv");
    fs::write(&file, "a,b\n")?;

    let entry = entry_at(&file).expect("existing file");
    assert_eq!(entry.name, "report.csv");
    assert_eq!(entry.kind, FileKind::File);
    assert_eq!(entry.size, 4);

    assert!(entry_at(&tmp.path().join("gone")).is_none());
    Ok(())
}

#[test]
fn list_children_returns_direct_entries_only() -> Result<()> {
    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("sub"))?;
    fs::write(tmp.path().join("sub").join("nested.txt"), "nested")?;
    fs::write(tmp.path().join("a.txt"), "aa")?;

    let children = list_children(tmp.path())?;
    let mut names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["a.txt", "sub"]);

    let file = children.iter().find(|c| c.name == "a.txt").unwrap();
    assert_eq!(file.kind, FileKind::File);
    assert_eq!(file.size, 2);
    Ok(())
}

#[test]
fn directory_size_is_sum_of_child_sizes() -> Result<()> {
    let tmp = tempdir()?;
    let root = tmp.path().join("root");
    fs::create_dir_all(root.join("deep").join("deeper"))?;
    fs::write(root.join("deep").join("deeper").join("x"), [0u8; 9])?;
    fs::write(root.join("deep").join("y"), [0u8; 4])?;
    fs::write(root.join("z"), [0u8; 2])?;

    let tree = render::snapshot(&root).expect("directory should snapshot");
    assert_eq!(tree.size, 15);

    // The invariant holds at every directory node.
    fn check(node: &dirtree::models::file_entry::FileNode) {
        if matches!(node.kind, FileKind::Dir) {
            let total: u64 = node.children.iter().map(|c| c.size).sum();
            assert_eq!(node.size, total, "mismatch at {}", node.name);
            node.children.iter().for_each(check);
        }
    }
    check(&tree);
    Ok(())
}

#[test]
fn snapshot_serializes_with_lowercase_kinds() -> Result<()> {
    let tmp = tempdir()?;
    let root = tmp.path().join("root");
    fs::create_dir(&root)?;
    fs::write(root.join("only.txt"), "1")?;

    let tree = render::snapshot(&root).expect("directory should snapshot");
    let json = serde_json::to_value(&tree)?;
    assert_eq!(json["kind"], "dir");
    assert_eq!(json["children"][0]["kind"], "file");
    assert_eq!(json["children"][0]["size"], 1);
    Ok(())
}
