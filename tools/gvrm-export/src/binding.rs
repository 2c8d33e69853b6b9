//! Splat binding table (`splat_binding.csv`).
//!
//! One row per splat in ascending splat index. The index column is the join
//! key used by the engine-side importer, so row order must never change.

use std::io::{self, Write};

use crate::record::ArchiveRecord;

/// Column header, always the first row
pub const BINDING_CSV_HEADER: [&str; 6] = [
    "SplatIndex",
    "VertexIndex",
    "BoneIndex",
    "RelativePosX",
    "RelativePosY",
    "RelativePosZ",
];

/// Bone index written for splats past the end of `splatBoneIndices`
pub const NO_BONE: i64 = -1;

const LINE_END: &str = "\r\n";

/// Binding of one splat to the mesh and skeleton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingRow {
    pub splat_index: usize,
    pub vertex_index: i64,
    pub bone_index: i64,
    /// Offset from the bound vertex (x, y, z)
    pub relative_pos: [f64; 3],
}

impl BindingRow {
    /// Write the row as one CSV line.
    ///
    /// Floats use Rust's shortest round-trip formatting, which keeps every
    /// digit present in the source and always has a fractional part.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let [x, y, z] = self.relative_pos;
        write!(
            w,
            "{},{},{},{:?},{:?},{:?}{}",
            self.splat_index, self.vertex_index, self.bone_index, x, y, z, LINE_END
        )
    }
}

/// Build binding rows in ascending splat index.
pub fn binding_rows(record: &ArchiveRecord) -> impl Iterator<Item = BindingRow> + '_ {
    record
        .splat_vertex_indices
        .iter()
        .zip(record.splat_relative_poses.chunks_exact(3))
        .enumerate()
        .map(move |(i, (&vertex_index, pos))| BindingRow {
            splat_index: i,
            vertex_index,
            bone_index: record.splat_bone_indices.get(i).copied().unwrap_or(NO_BONE),
            relative_pos: [pos[0], pos[1], pos[2]],
        })
}

/// Write the header and every binding row.
///
/// Returns the number of data rows written.
pub fn write_binding_csv<W: Write>(w: &mut W, record: &ArchiveRecord) -> io::Result<usize> {
    write!(w, "{}{}", BINDING_CSV_HEADER.join(","), LINE_END)?;

    let mut rows = 0;
    for row in binding_rows(record) {
        row.write_to(w)?;
        rows += 1;
    }
    Ok(rows)
}
