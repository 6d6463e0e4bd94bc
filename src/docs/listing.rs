//! Directory listing entries.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

/// One row of a directory index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
}

/// Read `dir`, directories first, then by name.
///
/// Dot-files are skipped unless `show_hidden`. Symlinks are described by the
/// link itself, never its target, so a link is listed as a file with size 0.
/// An entry whose metadata cannot be read is listed with size 0.
pub fn read_listing(dir: &Path, show_hidden: bool) -> io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let (is_dir, size) = match fs::symlink_metadata(entry.path()) {
            Ok(meta) if meta.file_type().is_symlink() => (false, 0),
            Ok(meta) => (meta.is_dir(), meta.len()),
            Err(_) => (entry.file_type().map(|t| t.is_dir()).unwrap_or(false), 0),
        };

        entries.push(ListingEntry { name, is_dir, size });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &ListingEntry, b: &ListingEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directories_first_then_alphabetical() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "bb").unwrap();
        fs::write(dir.path().join("A.md"), "a").unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let names: Vec<String> = read_listing(dir.path(), false)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["alpha", "zeta", "A.md", "b.md"]);
    }

    #[test]
    fn test_hidden_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".secret"), "x").unwrap();
        fs::write(dir.path().join("shown.md"), "x").unwrap();

        assert_eq!(read_listing(dir.path(), false).unwrap().len(), 1);
        assert_eq!(read_listing(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_sizes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("five.txt"), "12345").unwrap();
        let entries = read_listing(dir.path(), false).unwrap();
        assert_eq!(
            entries[0],
            ListingEntry { name: "five.txt".into(), is_dir: false, size: 5 }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_do_not_describe_their_target() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("big.bin"), vec![0u8; 4096]).unwrap();
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path().join("big.bin"), dir.path().join("peek"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("updir")).unwrap();

        let entries = read_listing(dir.path(), false).unwrap();
        assert_eq!(
            entries,
            [
                ListingEntry { name: "peek".into(), is_dir: false, size: 0 },
                ListingEntry { name: "updir".into(), is_dir: false, size: 0 },
            ]
        );
    }
}
