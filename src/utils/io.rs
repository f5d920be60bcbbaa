// src/utils/io.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append `password` and a trailing newline to `path`, creating the file
/// and any missing parent directories first.
///
/// One password per line, UTF-8. No locking.
pub fn save_password(path: &Path, password: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", password)?;

    log::info!("Saved password to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_appends_lines() -> io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("passwords.txt");

        save_password(&path, "first")?;
        save_password(&path, "sécond")?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "first\nsécond\n");
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_dirs() -> io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("saved_passwords.txt");

        save_password(&path, "12345678")?;

        let content = fs::read_to_string(&path)?;
        assert!(content.lines().any(|line| line.len() == 8));
        Ok(())
    }
}
