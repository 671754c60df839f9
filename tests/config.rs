use std::path::PathBuf;

use tacs_figures::config::{config_from_json, config_from_yaml, load_config_from_path};
use tacs_figures::config::MIN_TIME_RESOLUTION;
use tacs_figures::{FigureConfig, FigureError, FigureKind};

#[test]
fn defaults_match_publication_settings() {
    let cfg = FigureConfig::default();
    assert_eq!(cfg.dpi, 300);
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert_eq!(cfg.time_resolution, 0.01);
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let cfg = config_from_json(r#"{"dpi": 150}"#).unwrap();
    assert_eq!(cfg.dpi, 150);
    assert_eq!(cfg.time_resolution, 0.01);

    let cfg = config_from_yaml("output_dir: out/figures\ntime_resolution: 0.005\n").unwrap();
    assert_eq!(cfg.dpi, 300);
    assert_eq!(cfg.output_dir, PathBuf::from("out/figures"));
    assert_eq!(cfg.time_resolution, 0.005);
}

#[test]
fn loads_by_extension_and_validates() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("figures.yaml");
    std::fs::write(&yaml, "dpi: 600\n").unwrap();
    assert_eq!(load_config_from_path(&yaml).unwrap().dpi, 600);

    let json = dir.path().join("figures.json");
    std::fs::write(&json, r#"{"time_resolution": 0.0}"#).unwrap();
    assert!(matches!(
        load_config_from_path(&json),
        Err(FigureError::Config(_))
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{dpi:").unwrap();
    assert!(matches!(
        load_config_from_path(&broken),
        Err(FigureError::Config(_))
    ));

    assert!(matches!(
        load_config_from_path(&dir.path().join("absent.json")),
        Err(FigureError::Config(_))
    ));
}

#[test]
fn zero_dpi_is_invalid() {
    let cfg = FigureConfig {
        dpi: 0,
        ..FigureConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(FigureError::Config(_))));
}

#[test]
fn sub_microsecond_resolution_is_rejected() {
    let cfg = config_from_json(r#"{"time_resolution": 1e-15}"#).unwrap();
    assert!(matches!(cfg.validate(), Err(FigureError::Config(_))));
    let finest = FigureConfig {
        time_resolution: MIN_TIME_RESOLUTION,
        ..FigureConfig::default()
    };
    assert!(finest.validate().is_ok());
}

#[test]
fn unvalidated_fine_resolution_fails_as_an_error() {
    let cfg = FigureConfig {
        time_resolution: 1e-15,
        ..FigureConfig::default()
    };
    assert!(matches!(
        FigureKind::Phase.build(&cfg),
        Err(FigureError::InvalidParameter(_))
    ));
}
