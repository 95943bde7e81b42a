//! # Uploaded Files
//!
//! A [`FileSelection`] is what a file picker hands over for one request: zero
//! or more `(name, bytes)` pairs. It belongs to the host and is never stored in
//! a session; selecting again replaces it. Each file can be written back out
//! byte for byte.

use crate::error::{JotzError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads a file from disk, named after its final path component.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Listing entry for one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub number: usize,
    pub name: String,
    pub size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<UploadedFile>,
}

impl FileSelection {
    pub fn new(files: Vec<UploadedFile>) -> Self {
        Self { files }
    }

    /// Reads every path, failing on the first one that cannot be read.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let files = paths
            .iter()
            .map(|p| UploadedFile::read(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = files.len(), "files selected");
        Ok(Self { files })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// 1-based listing of the selection.
    pub fn entries(&self) -> Vec<FileEntry> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| FileEntry {
                number: i + 1,
                name: f.name.clone(),
                size: f.size(),
            })
            .collect()
    }

    pub fn get(&self, number: usize) -> Result<&UploadedFile> {
        number
            .checked_sub(1)
            .and_then(|i| self.files.get(i))
            .ok_or(JotzError::FileNotFound(number))
    }

    /// Writes file `number` unchanged. A directory destination receives the
    /// file under its original name. Returns the path written.
    pub fn download(&self, number: usize, dest: &Path) -> Result<PathBuf> {
        let file = self.get(number)?;
        let target = if dest.is_dir() {
            dest.join(&file.name)
        } else {
            dest.to_path_buf()
        };
        fs::write(&target, &file.bytes)?;
        debug!(number, target = %target.display(), "file downloaded");
        Ok(target)
    }
}
