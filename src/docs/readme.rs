//! README discovery for `mdv readme`.

use std::path::{Path, PathBuf};

const README_NAMES: [&str; 3] = ["README.md", "readme.md", "Readme.md"];

/// Walk up from `start` and return the first README found.
pub fn find_readme(start: &Path) -> Option<PathBuf> {
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());

    start.ancestors().find_map(|dir| {
        README_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_readme_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Top").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_readme(&nested), Some(dir.path().join("README.md")));
    }

    #[test]
    fn test_nearest_readme_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Top").unwrap();
        let nested = dir.path().join("pkg");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("Readme.md"), "# Pkg").unwrap();

        let found = find_readme(&nested).unwrap();
        assert_eq!(found.parent(), Some(nested.as_path()));
    }

    #[test]
    fn test_directory_named_readme_is_ignored() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("x");
        fs::create_dir_all(nested.join("README.md")).unwrap();
        fs::write(dir.path().join("readme.md"), "# Lower").unwrap();

        assert_eq!(find_readme(&nested), Some(dir.path().join("readme.md")));
    }
}
