//! Manual import steps for Unreal Engine 5 (`IMPORT_INSTRUCTIONS.md`).
//!
//! The document is fixed text; it does not depend on the converted archive.

const IMPORT_INSTRUCTIONS: &str = r#"# UE5 Import Instructions

## Overview
This directory contains converted GVRM data for Unreal Engine 5.

## Files
- `model.vrm` - VRM character model (requires VRM4U plugin)
- `model.ply` - Gaussian splatting point cloud (requires XVERSE plugin)
- `splat_binding.csv` - Splat-to-vertex binding data
- `metadata.json` - Additional metadata (scale, bone operations)

## Import Steps

### 1. Install Required Plugins
- VRM4U: https://github.com/ruyo/VRM4U
- XVERSE XScene-UEPlugin: https://github.com/xverse-engine/XScene-UEPlugin

### 2. Import VRM Model
1. Open Unreal Editor
2. Import `model.vrm` using VRM4U
3. Save to `/Game/GVRM/Characters/`

### 3. Import PLY File
1. Import `model.ply` using XVERSE plugin
2. Save to `/Game/GVRM/Splats/`

### 4. Create Data Table
1. Right-click in Content Browser → Miscellaneous → Data Table
2. Choose appropriate struct (create custom struct if needed)
3. Import `splat_binding.csv`
4. Save to `/Game/GVRM/Data/`

### 5. Create GVRM Binding Asset
1. Create a Data Asset of type `UGVRMBindingData`
2. Reference the Data Table created in step 4
3. Set metadata from `metadata.json`
4. Save to `/Game/GVRM/Data/`

### 6. Setup GVRM Actor
1. Create a Blueprint based on `AGVRMActor`
2. Assign the VRM skeletal mesh
3. Assign the GVRM binding data
4. Setup Niagara system

## Next Steps
See the main GVRM documentation for runtime setup and Niagara configuration.
"#;

/// Contents of `IMPORT_INSTRUCTIONS.md`.
pub fn import_instructions() -> &'static str {
    IMPORT_INSTRUCTIONS
}
