//! Programmatic GVRM archive generation for integration tests.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Stand-in VRM payload (binary glTF magic followed by filler)
pub const VRM_BYTES: &[u8] = b"glTF\x02\x00\x00\x00\x00\xff\x10\x80vrm-payload";
/// Stand-in PLY payload
pub const PLY_BYTES: &[u8] = b"ply\nformat binary_little_endian 1.0\nend_header\n\x00\x01\x02\xfe";

/// `data.json` of the reference two-splat avatar.
pub const REFERENCE_DATA_JSON: &str = r#"{
  "splatVertexIndices": [5, 9],
  "splatBoneIndices": [2],
  "splatRelativePoses": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
  "modelScale": 0.01,
  "boneOperations": [{"name": "J_Bip_C_Hips", "rotation": [0, 180, 0]}]
}"#;

/// Write a zip with the given entries.
pub fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create archive");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in entries {
        writer
            .start_file(name.to_string(), options)
            .expect("Failed to start entry");
        writer.write_all(content).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish archive");
}

/// Write a complete archive with the given `data.json` contents.
pub fn write_gvrm(dir: &Path, name: &str, data_json: &str) -> PathBuf {
    let path = dir.join(name);
    write_archive(
        &path,
        &[
            ("data.json", data_json.as_bytes()),
            ("model.vrm", VRM_BYTES),
            ("model.ply", PLY_BYTES),
        ],
    );
    path
}

/// Build a `data.json` with `splats` splats and `bones` bone indices.
pub fn generated_data_json(splats: usize, bones: usize) -> String {
    let vertices: Vec<usize> = (0..splats).map(|i| i * 7 + 3).collect();
    let bone_indices: Vec<usize> = (0..bones).map(|i| i % 54).collect();
    let poses: Vec<f64> = (0..splats * 3)
        .map(|i| (i as f64) * 0.001 - 0.5)
        .collect();

    serde_json::json!({
        "splatVertexIndices": vertices,
        "splatBoneIndices": bone_indices,
        "splatRelativePoses": poses,
        "modelScale": 1.25,
        "boneOperations": [],
    })
    .to_string()
}

/// Output file names in the output directory, sorted.
pub fn output_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
