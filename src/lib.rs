//! gplconv - GIMP palette to named colour list converter
//!
//! A library for turning GIMP palette files into deduplicated, name-sorted
//! colour lists for colour-picker tools.

pub mod cli;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod export;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod validation;

pub use convert::{convert_all, convert_file, BatchReport, ConvertOptions, Converted, Failure};
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{Channel, ConvertError, FormatError, FormatErrorKind, Result};
pub use export::{
    apply_channel_policy, artifact_name, export_to_dir, ChannelPolicy, ExportFormat, Exporter,
    GplExporter, JsonExporter,
};
pub use parser::parse_gpl;
pub use pipeline::{dedupe, dedupe_by_key, process, process_with_policy, process_with_stats, sort_by_name, Processed};
pub use source::{FsSource, TextSource};
pub use types::{ColorRecord, Palette, RgbKey};
pub use validation::{validate_palette, Diagnostic, Severity, ValidationResult};
