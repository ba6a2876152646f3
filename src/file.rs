// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::error::{HarvestError, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(HarvestError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent directory of `path` when it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Overwrite `path` with `contents`. A sibling temp file is renamed into
/// place so a reader never sees a half-written checkpoint.
pub fn write_replace(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replace_creates_dirs_and_overwrites() {
        let dir = std::env::temp_dir().join("rail_scrape_file_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("out.json");

        write_replace(&path, b"first").unwrap();
        write_replace(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.join("nested").join("out.json.tmp").exists());
    }

    #[test]
    fn ensure_directory_rejects_file() {
        let path = std::env::temp_dir().join("rail_scrape_not_a_dir");
        fs::write(&path, b"x").unwrap();
        assert!(ensure_directory(&path).is_err());
    }
}
