use crate::error::{CorpusdlError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => CorpusdlError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => CorpusdlError::from(e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories_once() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // a second call on an existing path is a no-op
        ensure_dir_exists(&nested).unwrap();
    }
}
