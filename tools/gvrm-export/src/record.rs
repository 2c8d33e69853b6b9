//! Binding record (`data.json`) parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::error::MalformedReason;
use crate::formats::DATA_ENTRY;

fn default_model_scale() -> f64 {
    1.0
}

/// Parsed contents of the archive's `data.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    /// Mesh vertex each splat follows (one entry per splat)
    pub splat_vertex_indices: Vec<i64>,
    /// Bone each splat follows; may be shorter than the splat list
    #[serde(default)]
    pub splat_bone_indices: Vec<i64>,
    /// Flat xyz offsets, 3 components per splat
    pub splat_relative_poses: Vec<f64>,
    #[serde(default = "default_model_scale")]
    pub model_scale: f64,
    /// Opaque skeleton setup instructions, passed through untouched
    #[serde(default)]
    pub bone_operations: Vec<Value>,
}

impl ArchiveRecord {
    /// Parse and validate a binding record.
    ///
    /// Rejects records whose pose array is not exactly three components per
    /// splat, so row construction never reads misaligned offsets.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedReason> {
        let record: Self =
            serde_json::from_slice(bytes).map_err(|source| MalformedReason::InvalidRecord {
                entry: DATA_ENTRY.to_string(),
                source,
            })?;
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<(), MalformedReason> {
        let splats = self.splat_count();
        let expected = splats * 3;
        let poses = self.splat_relative_poses.len();
        if poses != expected {
            return Err(MalformedReason::PoseLengthMismatch {
                poses,
                splats,
                expected,
            });
        }
        Ok(())
    }

    pub fn splat_count(&self) -> usize {
        self.splat_vertex_indices.len()
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            splat_count: self.splat_count(),
            model_scale: self.model_scale,
            bone_operation_count: self.bone_operations.len(),
        }
    }
}

/// Counters reported to the operator after reading the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordSummary {
    pub splat_count: usize,
    pub model_scale: f64,
    pub bone_operation_count: usize,
}
