pub mod check;
pub mod completions;
pub mod convert;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::{discover, discover_paths, load_manifest, DiscoveryResult};
use crate::error::Result;

/// gplconv - GIMP palette to named colour list converter
#[derive(Parser, Debug)]
#[command(name = "gplconv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert GIMP palettes into named colour lists
    Convert(convert::ConvertArgs),

    /// Check palette files without converting them
    Check(check::CheckArgs),

    /// Initialize a project (generates gplconv.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Find the palettes a command should work on.
///
/// With no paths, the manifest in the current directory decides. Explicit
/// paths still pick up the manifest's settings.
fn resolve_inputs(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        discover(".")
    } else {
        let (manifest, _) = load_manifest(Path::new("."))?;
        Ok(discover_paths(paths, manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_flags() {
        let cli = Cli::try_parse_from([
            "gplconv",
            "convert",
            "palettes",
            "-o",
            "out",
            "--format",
            "gpl",
            "--out-of-range",
            "pass-through",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("palettes")]);
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert_eq!(args.format, Some(crate::export::ExportFormat::Gpl));
                assert_eq!(
                    args.out_of_range,
                    Some(crate::export::ChannelPolicy::PassThrough)
                );
            }
            other => panic!("expected convert, got {:?}", other),
        }
    }
}
