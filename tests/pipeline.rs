//! End-to-end tests over the fixture palettes.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gplconv::{
    convert_all, process, process_with_stats, ChannelPolicy, ColorRecord, ConvertOptions,
    ExportFormat, Exporter, FormatErrorKind, FsSource, GplExporter,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

#[test]
fn test_example_fixture() {
    let palette = process(&load_fixture("example.gpl")).unwrap();

    assert_eq!(palette.name, "Test Pal");
    assert_eq!(
        palette.colors,
        vec![
            ColorRecord::new("Green", 0, 255, 0),
            ColorRecord::new("Red", 255, 0, 0),
        ]
    );
}

#[test]
fn test_threads_fixture() {
    let processed = process_with_stats(&load_fixture("threads.gpl")).unwrap();
    let palette = &processed.palette;

    assert_eq!(palette.name, "Embroidery-DMC Reds");
    assert_eq!(processed.parsed, 6);
    assert_eq!(processed.duplicates, 2);
    assert_eq!(
        palette.colors,
        vec![
            ColorRecord::new("Antique Red", 120, 10, 10),
            ColorRecord::new("DMC 321 Red", 190, 0, 30),
            ColorRecord::new("dmc 666 bright red", 250, 50, 50),
            ColorRecord::new("DMC 815 Garnet", 150, 0, 20),
        ]
    );
}

#[test]
fn test_invariants_hold_for_fixtures() {
    for name in ["example.gpl", "threads.gpl"] {
        let palette = process(&load_fixture(name)).unwrap();

        let mut keys: Vec<_> = palette.colors.iter().map(ColorRecord::rgb).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), palette.len(), "{} has RGB duplicates", name);

        for pair in palette.colors.windows(2) {
            assert!(
                pair[0].name.to_lowercase() <= pair[1].name.to_lowercase(),
                "{}: {:?} sorts after {:?}",
                name,
                pair[0].name,
                pair[1].name
            );
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let source = load_fixture("threads.gpl");
    let first = process(&source).unwrap();

    assert_eq!(process(&source).unwrap(), first);

    let rewritten = GplExporter.render(&first).unwrap();
    assert_eq!(process(&rewritten).unwrap(), first);
}

#[test]
fn test_broken_fixture_reports_line() {
    let err = process(&load_fixture("broken.gpl")).unwrap_err();

    assert_eq!(err.kind(), FormatErrorKind::NonIntegerChannel);
    assert_eq!(err.line(), Some("40\t50\tsixty\tNot fine"));
    assert!(err.to_string().starts_with("line 5:"));
}

#[test]
fn test_batch_over_fixtures() {
    let out = tempdir().unwrap();
    let options = ConvertOptions {
        output: out.path().to_path_buf(),
        format: ExportFormat::Json,
        policy: ChannelPolicy::Reject,
    };
    let files: Vec<PathBuf> = ["broken.gpl", "example.gpl", "threads.gpl"]
        .iter()
        .map(|n| fixture_path(n))
        .collect();

    let report = convert_all(&FsSource, &files, &options, |_, _| {});

    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].input, fixture_path("broken.gpl"));

    let mut written: Vec<String> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["Embroidery-DMC Reds.json", "Test Pal.json"]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("Test Pal.json")).unwrap())
            .unwrap();
    assert_eq!(json["name"], "Test Pal");
    assert_eq!(json["colors"][0]["name"], "Green");
    assert_eq!(json["colors"][1]["hex"], "#FF0000");
}
