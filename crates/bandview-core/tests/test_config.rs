use bandview_core::config::{load_config, DisplayStretch, ViewerConfig, ZoomConfig};
use bandview_core::error::BandviewError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_matches_viewer_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.title, "Raster Viewer");
    assert_eq!(config.zoom.min, 1.0);
    assert_eq!(config.zoom.max, 10.0);
    assert_eq!(config.zoom.step, 1.0);
    assert_eq!(config.stretch, DisplayStretch::Auto);
    assert!(config.validate().is_ok());
}

#[test]
fn test_display_stretch_display() {
    assert_eq!(format!("{}", DisplayStretch::Auto), "Auto");
    assert_eq!(format!("{}", DisplayStretch::Clip), "Clip");
    assert_eq!(format!("{}", DisplayStretch::MinMax), "Min-Max");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_min_below_one_rejected() {
    let zoom = ZoomConfig {
        min: 0.5,
        ..ZoomConfig::default()
    };
    assert!(matches!(zoom.validate(), Err(BandviewError::Config(_))));
}

#[test]
fn test_zoom_range_must_be_increasing() {
    let zoom = ZoomConfig {
        min: 4.0,
        max: 4.0,
        step: 1.0,
    };
    assert!(matches!(zoom.validate(), Err(BandviewError::Config(_))));
}

#[test]
fn test_zoom_step_must_be_positive() {
    let zoom = ZoomConfig {
        step: 0.0,
        ..ZoomConfig::default()
    };
    assert!(matches!(zoom.validate(), Err(BandviewError::Config(_))));

    let zoom = ZoomConfig {
        step: f64::NAN,
        ..ZoomConfig::default()
    };
    assert!(zoom.validate().is_err());
}

// ---------------------------------------------------------------------------
// TOML / serde
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip() {
    let mut config = ViewerConfig::default();
    config.title = "Landsat".into();
    config.stretch = DisplayStretch::MinMax;
    config.zoom.max = 20.0;

    let text = config.to_toml().unwrap();
    let parsed = ViewerConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed = ViewerConfig::from_toml("stretch = \"min-max\"\n[zoom]\nmax = 4.0\n").unwrap();
    assert_eq!(parsed.stretch, DisplayStretch::MinMax);
    assert_eq!(parsed.zoom.max, 4.0);
    assert_eq!(parsed.zoom.min, 1.0);
    assert_eq!(parsed.title, "Raster Viewer");
}

#[test]
fn test_invalid_toml_values_rejected() {
    let err = ViewerConfig::from_toml("[zoom]\nmin = 5.0\nmax = 2.0\n").unwrap_err();
    assert!(matches!(err, BandviewError::Config(_)), "got {err:?}");

    let err = ViewerConfig::from_toml("stretch = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, BandviewError::Config(_)), "got {err:?}");
}

#[test]
fn test_stretch_serde_json_names() {
    let json = serde_json::to_string(&DisplayStretch::MinMax).unwrap();
    assert_eq!(json, "\"min-max\"");
    let back: DisplayStretch = serde_json::from_str("\"clip\"").unwrap();
    assert_eq!(back, DisplayStretch::Clip);
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bandview.toml");
    std::fs::write(&path, "title = \"From file\"\n").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.title, "From file");
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BandviewError::Io(_)), "got {err:?}");
}
