//! Read-only access to a `.gvrm` archive.
//!
//! A GVRM file is a plain zip container holding the binding record
//! (`data.json`) next to the two binary payloads (`model.vrm`, `model.ply`).
//! The container is opened once and dropped when the archive goes out of
//! scope, so its file handle is released on every exit path.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{ConvertError, MalformedReason};
use crate::formats::DATA_ENTRY;
use crate::record::ArchiveRecord;

pub struct GvrmArchive {
    path: PathBuf,
    zip: ZipArchive<File>,
}

impl GvrmArchive {
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| {
            ConvertError::io(format!("Failed to open archive: {}", path.display()), e)
        })?;
        let zip = ZipArchive::new(file).map_err(|e| match e {
            ZipError::Io(source) => {
                ConvertError::io(format!("Failed to read archive: {}", path.display()), source)
            }
            other => ConvertError::malformed(path, MalformedReason::NotZip(other)),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            zip,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the container
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Read a whole entry into memory.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ConvertError> {
        let mut entry = self
            .zip
            .by_name(name)
            .map_err(|e| entry_error(&self.path, name, e))?;

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).map_err(|e| {
            ConvertError::io(
                format!("Failed to read '{}' from {}", name, self.path.display()),
                e,
            )
        })?;
        Ok(bytes)
    }

    /// Parse and validate the binding record.
    pub fn read_record(&mut self) -> Result<ArchiveRecord, ConvertError> {
        let bytes = self.read_entry(DATA_ENTRY)?;
        ArchiveRecord::from_slice(&bytes)
            .map_err(|reason| ConvertError::malformed(&self.path, reason))
    }

    /// Copy an entry byte-for-byte to `<dest_dir>/<name>`.
    ///
    /// Returns the written path and the number of bytes copied.
    pub fn extract_entry(
        &mut self,
        name: &str,
        dest_dir: &Path,
    ) -> Result<(PathBuf, u64), ConvertError> {
        let mut entry = self
            .zip
            .by_name(name)
            .map_err(|e| entry_error(&self.path, name, e))?;

        let output = dest_dir.join(name);
        let mut file = File::create(&output).map_err(|e| {
            ConvertError::io(format!("Failed to create output: {}", output.display()), e)
        })?;
        let bytes = io::copy(&mut entry, &mut file).map_err(|e| {
            ConvertError::io(format!("Failed to extract '{}' to {}", name, output.display()), e)
        })?;

        Ok((output, bytes))
    }
}

fn entry_error(archive: &Path, name: &str, err: ZipError) -> ConvertError {
    match err {
        ZipError::FileNotFound => {
            ConvertError::malformed(archive, MalformedReason::MissingEntry(name.to_string()))
        }
        ZipError::Io(source) => ConvertError::io(
            format!("Failed to read '{}' from {}", name, archive.display()),
            source,
        ),
        other => ConvertError::malformed(archive, MalformedReason::NotZip(other)),
    }
}
