//! GVRM -> UE5 conversion pipeline.
//!
//! Steps, in order:
//! 1. Read `data.json` and report splat/scale/bone-operation counters
//! 2. Extract `model.vrm` and `model.ply` verbatim
//! 3. Export the per-splat binding table
//! 4. Export the metadata summary
//! 5. Write the import instructions
//!
//! Any failure aborts the run. Files written by earlier steps are left in
//! place, so a failed run leaves the output directory in an unreliable state.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::archive::GvrmArchive;
use crate::binding::write_binding_csv;
use crate::error::ConvertError;
use crate::formats::{
    BINDING_CSV_FILE, INSTRUCTIONS_FILE, METADATA_FILE, MODEL_PLY_ENTRY, MODEL_VRM_ENTRY,
    PAYLOAD_ENTRIES,
};
use crate::instructions::import_instructions;
use crate::metadata::{write_metadata, MetadataSummary};
use crate::record::RecordSummary;

const STEPS: u32 = 5;

/// Paths of the five artifacts produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub model_vrm: PathBuf,
    pub model_ply: PathBuf,
    pub binding_csv: PathBuf,
    pub metadata: PathBuf,
    pub instructions: PathBuf,
}

impl OutputFiles {
    fn in_dir(dir: &Path) -> Self {
        Self {
            model_vrm: dir.join(MODEL_VRM_ENTRY),
            model_ply: dir.join(MODEL_PLY_ENTRY),
            binding_csv: dir.join(BINDING_CSV_FILE),
            metadata: dir.join(METADATA_FILE),
            instructions: dir.join(INSTRUCTIONS_FILE),
        }
    }

    pub fn paths(&self) -> [&Path; 5] {
        [
            &self.model_vrm,
            &self.model_ply,
            &self.binding_csv,
            &self.metadata,
            &self.instructions,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub summary: RecordSummary,
    /// Data rows in the binding table (header excluded)
    pub binding_rows: usize,
    pub outputs: OutputFiles,
}

/// Converts one GVRM archive into a directory of import files.
#[derive(Debug, Clone)]
pub struct Converter {
    input: PathBuf,
    output_dir: PathBuf,
}

impl Converter {
    /// Check the input archive exists, then ensure the output directory.
    ///
    /// The output directory (and any missing parents) is only created once
    /// the input is known to be a file.
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConvertError> {
        let input = input.into();
        let output_dir = output_dir.into();

        if !input.is_file() {
            return Err(ConvertError::NotFound { path: input });
        }

        fs::create_dir_all(&output_dir).map_err(|e| {
            ConvertError::io(
                format!("Failed to create output directory: {}", output_dir.display()),
                e,
            )
        })?;

        Ok(Self { input, output_dir })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the whole pipeline.
    pub fn convert(&self) -> Result<ConversionReport, ConvertError> {
        tracing::info!("Converting {}", self.input.display());
        tracing::info!("Output directory: {}", self.output_dir.display());

        let outputs = OutputFiles::in_dir(&self.output_dir);
        let mut archive = GvrmArchive::open(&self.input)?;
        tracing::debug!(
            entries = archive.len(),
            "Opened archive {}",
            archive.path().display()
        );

        tracing::info!(step = 1, total = STEPS, "Reading data.json");
        let record = archive.read_record()?;
        let summary = record.summary();
        tracing::info!(
            splat_count = summary.splat_count,
            model_scale = summary.model_scale,
            bone_operations = summary.bone_operation_count,
            "Read binding record"
        );

        tracing::info!(step = 2, total = STEPS, "Extracting VRM and PLY files");
        for name in PAYLOAD_ENTRIES {
            let (path, bytes) = archive.extract_entry(name, &self.output_dir)?;
            tracing::debug!(bytes, "Wrote {}", path.display());
            tracing::info!("Extracted {}", name);
        }

        tracing::info!(step = 3, total = STEPS, "Exporting binding data");
        let binding_rows = write_file(&outputs.binding_csv, |w| write_binding_csv(w, &record))?;
        tracing::info!(
            "Exported {} splat bindings to {}",
            binding_rows,
            BINDING_CSV_FILE
        );

        tracing::info!(step = 4, total = STEPS, "Exporting metadata");
        let metadata = MetadataSummary::from_record(&record, &self.input);
        write_file(&outputs.metadata, |w| write_metadata(w, &metadata))?;
        tracing::info!("Exported metadata to {}", METADATA_FILE);

        tracing::info!(step = 5, total = STEPS, "Generating import instructions");
        write_file(&outputs.instructions, |w| {
            w.write_all(import_instructions().as_bytes())
        })?;
        tracing::info!("Generated {}", INSTRUCTIONS_FILE);

        tracing::info!("Conversion complete");
        for path in outputs.paths() {
            tracing::info!("  - {}", path.display());
        }

        Ok(ConversionReport {
            summary,
            binding_rows,
            outputs,
        })
    }
}

/// Create `path`, run `body` against a buffered writer and flush.
fn write_file<T>(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<T>,
) -> Result<T, ConvertError> {
    let file = File::create(path)
        .map_err(|e| ConvertError::io(format!("Failed to create output: {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    let value = body(&mut writer)
        .map_err(|e| ConvertError::io(format!("Failed to write {}", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| ConvertError::io(format!("Failed to write {}", path.display()), e))?;

    Ok(value)
}
