//! Error kinds reported by the converter.

use std::io;
use std::path::PathBuf;

/// Why an archive was rejected.
#[derive(Debug, thiserror::Error)]
pub enum MalformedReason {
    /// The file is not a readable zip container
    #[error("not a readable zip container")]
    NotZip(#[source] zip::result::ZipError),

    /// A required entry is absent
    #[error("missing required entry '{0}'")]
    MissingEntry(String),

    /// The binding record is not valid JSON or lacks a required key
    #[error("'{entry}' is not a valid binding record")]
    InvalidRecord {
        entry: String,
        #[source]
        source: serde_json::Error,
    },

    /// `splatRelativePoses` does not hold one xyz triplet per splat
    #[error("splatRelativePoses has {poses} components, expected {expected} (3 x {splats} splats)")]
    PoseLengthMismatch {
        poses: usize,
        splats: usize,
        expected: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input archive does not exist (checked before any archive I/O)
    #[error("GVRM file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed archive: {}", path.display())]
    MalformedArchive {
        path: PathBuf,
        #[source]
        reason: MalformedReason,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: MalformedReason) -> Self {
        Self::MalformedArchive {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedArchive { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
