// SPDX-License-Identifier: MPL-2.0
//! Portfolio scanner: turns a directory tree into gallery projects.
//!
//! ```text
//! portfolio/            -> "portfolio" (loose images, listed first)
//! ├── cover.jpg
//! ├── kitchen-remodel/  -> "kitchen-remodel"
//! │   ├── 01.jpg
//! │   └── 02.png
//! └── loft/             -> "loft"
//!     └── after.webp
//! ```
//!
//! Only one level of sub-directories is scanned. Directories without a
//! supported image are skipped.

use crate::error::{PortfolioError, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// One gallery: a named, ordered list of image paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    root: PathBuf,
    projects: Vec<Project>,
}

impl Portfolio {
    /// Scans `root` for projects.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::NotADirectory`] if `root` is not a directory.
    /// - [`PortfolioError::NoImages`] if no project has any image.
    /// - [`Error::Io`](crate::error::Error::Io) if `root` itself cannot be
    ///   read. Unreadable project directories are skipped.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(PortfolioError::NotADirectory(root.display().to_string()).into());
        }

        let mut loose = Vec::new();
        let mut sub_dirs = Vec::new();

        for entry in std::fs::read_dir(root)? {
            let path = entry?.path();
            if path.is_dir() {
                sub_dirs.push(path);
            } else if path.is_file() && media::is_supported_image(&path) {
                loose.push(path);
            }
        }

        sub_dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut projects = Vec::new();
        if !loose.is_empty() {
            sort_by_file_name(&mut loose);
            projects.push(Project {
                name: display_name(root),
                images: loose,
            });
        }

        projects.extend(sub_dirs.iter().filter_map(|dir| scan_project(dir)));

        if projects.is_empty() {
            return Err(PortfolioError::NoImages(root.display().to_string()).into());
        }

        tracing::info!(
            root = %root.display(),
            projects = projects.len(),
            "portfolio scanned"
        );

        Ok(Self {
            root: root.to_path_buf(),
            projects,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Project for `dir`, or `None` when it has no image or cannot be read.
fn scan_project(dir: &Path) -> Option<Project> {
    let images = match scan_images(dir) {
        Ok(images) => images,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return None;
        }
    };
    if images.is_empty() {
        tracing::debug!(dir = %dir.display(), "skipping directory without images");
        return None;
    }
    Some(Project {
        name: display_name(dir),
        images,
    })
}

fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && media::is_supported_image(&path) {
            images.push(path);
        }
    }
    sort_by_file_name(&mut images);
    Ok(images)
}

fn sort_by_file_name(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("failed to create file");
    }

    #[test]
    fn sub_directories_become_sorted_projects() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        for (dir, file) in [("loft", "b.jpg"), ("kitchen", "a.png"), ("loft", "a.JPG")] {
            fs::create_dir_all(root.join(dir)).expect("failed to create dir");
            touch(&root.join(dir).join(file));
        }

        let portfolio = Portfolio::scan(root).expect("scan should succeed");

        let names: Vec<_> = portfolio.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["kitchen", "loft"]);
        let loft = portfolio.project(1).expect("loft project");
        let files: Vec<_> = loft
            .images
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(files, vec!["a.JPG", "b.jpg"]);
    }

    #[test]
    fn unreadable_directory_is_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(scan_project(&temp_dir.path().join("vanished")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn locked_project_does_not_fail_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        for dir in ["kitchen", "locked"] {
            fs::create_dir_all(root.join(dir)).expect("failed to create dir");
            touch(&root.join(dir).join("1.jpg"));
        }
        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("failed to lock dir");

        let result = Portfolio::scan(root);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("failed to unlock dir");
        let portfolio = result.expect("scan should succeed");
        // Privileged users can still read the locked directory.
        assert_eq!(portfolio.projects()[0].name, "kitchen");
    }

    #[test]
    fn loose_images_form_a_root_project() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("studio");
        fs::create_dir_all(root.join("bath")).expect("failed to create dir");
        touch(&root.join("cover.webp"));
        touch(&root.join("bath").join("1.gif"));

        let portfolio = Portfolio::scan(&root).expect("scan should succeed");

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.projects()[0].name, "studio");
        assert_eq!(portfolio.projects()[1].name, "bath");
    }

    #[test]
    fn unsupported_files_and_empty_directories_are_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir_all(root.join("drafts")).expect("failed to create dir");
        fs::create_dir_all(root.join("office")).expect("failed to create dir");
        touch(&root.join("drafts").join("notes.txt"));
        touch(&root.join("office").join("desk.bmp"));
        touch(&root.join("README.md"));

        let portfolio = Portfolio::scan(root).expect("scan should succeed");

        assert_eq!(portfolio.len(), 1);
        assert_eq!(portfolio.projects()[0].name, "office");
    }

    #[test]
    fn missing_root_is_not_a_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        match Portfolio::scan(&missing) {
            Err(Error::Portfolio(PortfolioError::NotADirectory(_))) => {}
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn root_without_images_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        match Portfolio::scan(temp_dir.path()) {
            Err(Error::Portfolio(PortfolioError::NoImages(_))) => {}
            other => panic!("expected NoImages, got {other:?}"),
        }
    }
}
