//! Metadata summary (`metadata.json`).

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::formats::METADATA_VERSION;
use crate::record::ArchiveRecord;

/// Fields the engine importer reads besides the binding table.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSummary {
    pub model_scale: f64,
    pub bone_operations: Vec<Value>,
    pub splat_count: usize,
    pub version: String,
    /// File name of the source archive
    pub source: String,
}

impl MetadataSummary {
    pub fn from_record(record: &ArchiveRecord, archive: &Path) -> Self {
        let source = archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            model_scale: record.model_scale,
            bone_operations: record.bone_operations.clone(),
            splat_count: record.splat_count(),
            version: METADATA_VERSION.to_string(),
            source,
        }
    }
}

/// Write the summary as JSON with two-space indentation.
pub fn write_metadata<W: Write>(w: &mut W, summary: &MetadataSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(w, summary)?;
    Ok(())
}
