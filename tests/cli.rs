//! Validates argument parsing and run orchestration

use clap::Parser;
use hexmock::io::cli::{Cli, GridProcessor};
use hexmock::io::configuration::{
    DEFAULT_CELL_KM, DEFAULT_EAST, DEFAULT_NORTH, DEFAULT_SEED, DEFAULT_SOUTH, DEFAULT_WEST,
};

fn small_region_args(output: &str) -> Vec<String> {
    [
        "hexmock", output, "--west", "-100.0", "--south", "30.0", "--east", "-95.0", "--north",
        "35.0", "--cell-km", "60.0", "--quiet",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_defaults_cover_the_continental_region() {
    let cli = Cli::parse_from(["hexmock", "out.geojson"]);

    assert!((cli.west - DEFAULT_WEST).abs() < f64::EPSILON);
    assert!((cli.south - DEFAULT_SOUTH).abs() < f64::EPSILON);
    assert!((cli.east - DEFAULT_EAST).abs() < f64::EPSILON);
    assert!((cli.north - DEFAULT_NORTH).abs() < f64::EPSILON);
    assert!((cli.cell_km - DEFAULT_CELL_KM).abs() < f64::EPSILON);
    assert_eq!(cli.seed, DEFAULT_SEED);
    assert!(!cli.random_seed);
    assert!(!cli.pretty);
    assert!(!cli.quiet);
    assert!(!cli.force);
    assert!(!cli.stats);
    assert!(cli.should_show_progress());
}

#[test]
fn test_negative_edges_parse() {
    let cli = Cli::parse_from(["hexmock", "out.geojson", "--west", "-10.5", "--east", "-2.25"]);

    assert!((cli.west + 10.5).abs() < f64::EPSILON);
    assert!((cli.east + 2.25).abs() < f64::EPSILON);
}

#[test]
fn test_random_seed_conflicts_with_seed() {
    let result = Cli::try_parse_from(["hexmock", "out.geojson", "--seed", "7", "--random-seed"]);
    assert!(result.is_err());
}

#[test]
fn test_fixed_seed_is_the_effective_seed() {
    let cli = Cli::parse_from(["hexmock", "out.geojson", "--seed", "123"]);
    assert_eq!(cli.effective_seed(), 123);
}

#[test]
fn test_process_writes_the_output_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.geojson");

    let cli = Cli::parse_from(small_region_args(path.to_str().unwrap()));
    GridProcessor::new(cli).process().unwrap();

    assert!(path.exists());
    let document = std::fs::read_to_string(&path).unwrap();
    assert!(document.contains("FeatureCollection"));
}

#[test]
fn test_existing_output_is_preserved_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.geojson");
    std::fs::write(&path, "sentinel").unwrap();

    let cli = Cli::parse_from(small_region_args(path.to_str().unwrap()));
    GridProcessor::new(cli).process().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "sentinel");
}

#[test]
fn test_force_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.geojson");
    std::fs::write(&path, "sentinel").unwrap();

    let mut args = small_region_args(path.to_str().unwrap());
    args.push("--force".to_owned());

    let cli = Cli::parse_from(args);
    GridProcessor::new(cli).process().unwrap();

    let document = std::fs::read_to_string(&path).unwrap();
    assert!(!document.contains("sentinel"));
    assert!(document.contains("FeatureCollection"));
}

#[test]
fn test_stats_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.geojson");

    let mut args = small_region_args(path.to_str().unwrap());
    args.push("--stats".to_owned());

    let cli = Cli::parse_from(args);
    GridProcessor::new(cli).process().unwrap();

    assert!(path.exists());
}

#[test]
fn test_invalid_region_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.geojson");

    let cli = Cli::parse_from([
        "hexmock",
        path.to_str().unwrap(),
        "--west",
        "-66.5",
        "--east",
        "-125.0",
        "--quiet",
    ]);
    assert!(GridProcessor::new(cli).process().is_err());
    assert!(!path.exists());
}
