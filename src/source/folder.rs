use super::{ImageSource, SourceImage};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// File name suffixes picked up from the input folder (case-sensitive)
pub const EXTENSIONS: [&str; 2] = [".jpg", ".png"];

/// Whether a file name should be processed
pub fn is_candidate(file_name: &str) -> bool {
    EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Images found directly inside one folder, in file name order
pub struct FolderSource {
    folder: PathBuf,
    pending: VecDeque<PathBuf>,
}

impl FolderSource {
    pub fn open<P: AsRef<Path>>(folder: P) -> Result<Self> {
        let folder = folder.as_ref().to_path_buf();
        tracing::info!("Scanning {}", folder.display());

        let entries = fs::read_dir(&folder)
            .with_context(|| format!("Failed to read folder {}", folder.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to list folder {}", folder.display()))?;
            let path = entry.path();

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::debug!("Skipping non UTF-8 name {}", path.display());
                continue;
            };

            if !is_candidate(name) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }

            if !entry
                .file_type()
                .with_context(|| format!("Failed to stat {}", path.display()))?
                .is_file()
            {
                tracing::debug!("Skipping non-file {}", path.display());
                continue;
            }

            paths.push(path);
        }
        paths.sort();

        tracing::info!("Found {} image(s) to process", paths.len());

        Ok(Self {
            folder,
            pending: paths.into(),
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Paths that have not been loaded yet
    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.pending.iter().map(PathBuf::as_path)
    }
}

impl ImageSource for FolderSource {
    fn next_image(&mut self) -> Option<Result<SourceImage>> {
        let path = self.pending.pop_front()?;

        let loaded = image::open(&path)
            .with_context(|| format!("Failed to load image {}", path.display()))
            .map(|decoded| SourceImage {
                pixels: decoded.to_rgb8(),
                path,
            });

        Some(loaded)
    }

    fn remaining(&self) -> usize {
        self.pending.len()
    }
}
