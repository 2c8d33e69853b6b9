//! gvrm-export library
//!
//! Unpacks a `.gvrm` archive (VRM character model, Gaussian splat point cloud
//! and the splat-to-skeleton binding record) into flat files for an engine
//! import pipeline.

pub mod archive;
pub mod binding;
pub mod converter;
pub mod error;
pub mod formats;
pub mod instructions;
pub mod metadata;
pub mod record;

pub use archive::GvrmArchive;
pub use binding::{binding_rows, write_binding_csv, BindingRow};
pub use converter::{ConversionReport, Converter, OutputFiles};
pub use error::{ConvertError, MalformedReason};
pub use instructions::import_instructions;
pub use metadata::{write_metadata, MetadataSummary};
pub use record::{ArchiveRecord, RecordSummary};
