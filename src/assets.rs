//! Finding image files on disk for the hero slides and gallery tiles.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(Error::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Picks a file for each wanted path.
///
/// A wanted file that exists is used as is. Missing ones are filled, in
/// order, from the images of `fallback` not already claimed. Whatever is
/// left gets `None` and is drawn as a placeholder.
pub fn resolve_images(wanted: &[PathBuf], fallback: &[PathBuf]) -> Vec<Option<PathBuf>> {
    let mut spare = fallback.iter().filter(|path| !wanted.contains(path));

    wanted
        .iter()
        .map(|path| {
            if path.is_file() {
                Some(path.clone())
            } else {
                let substitute = spare.next().cloned();
                debug!(?path, ?substitute, "image missing");
                substitute
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.JPG");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.png", "b.JPG"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(load_sorted_image_paths(dir.path()), Err(Error::NoImages(_))));
    }

    #[test]
    fn missing_files_take_unclaimed_fallbacks() {
        let dir = tempdir().unwrap();
        let logo = touch(dir.path(), "logo.png");
        let extra = touch(dir.path(), "zz-extra.jpg");
        let wanted = vec![dir.path().join("missing.png"), logo.clone(), dir.path().join("gone.png")];

        let resolved = resolve_images(&wanted, &[logo.clone(), extra.clone()]);
        assert_eq!(resolved, vec![Some(extra), Some(logo), None]);
    }
}
