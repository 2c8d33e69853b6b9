//! File names shared between the archive reader and the exporters.

/// Binding record inside the archive
pub const DATA_ENTRY: &str = "data.json";
/// VRM character model inside the archive
pub const MODEL_VRM_ENTRY: &str = "model.vrm";
/// Gaussian splat point cloud inside the archive
pub const MODEL_PLY_ENTRY: &str = "model.ply";

/// Per-splat binding table written to the output directory
pub const BINDING_CSV_FILE: &str = "splat_binding.csv";
/// Metadata summary written to the output directory
pub const METADATA_FILE: &str = "metadata.json";
/// Manual import steps written to the output directory
pub const INSTRUCTIONS_FILE: &str = "IMPORT_INSTRUCTIONS.md";

/// Version tag stamped into `metadata.json`
pub const METADATA_VERSION: &str = "1.0";

/// Binary payloads copied verbatim, in extraction order.
pub const PAYLOAD_ENTRIES: [&str; 2] = [MODEL_VRM_ENTRY, MODEL_PLY_ENTRY];
