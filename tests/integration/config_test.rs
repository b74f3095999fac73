//! Integration tests for configuration loading and saving

use tempfile::TempDir;

use super::helpers::temp_file;
use sonic_sync::config::TimelineConfig;
use sonic_sync::error::ConfigError;
use sonic_sync::timeline::{default_segments, BoundaryRule, Intensity, VibrationPattern};
use sonic_sync::Config;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.timeline.uses_defaults());
}

#[test]
fn saved_config_loads_back_with_timeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.player.loop_playback = false;
    config.timeline.segments = default_segments();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.timeline.build_table().unwrap().len(), 6);
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = temp_file("config.toml", "[player]\nframe_rate = 30\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.player.frame_rate, 30);
    assert_eq!(config.player.media_duration, 40.0);
    assert_eq!(config.timeline.boundary, BoundaryRule::Inclusive);
}

#[test]
fn invalid_toml_reports_path() {
    let (_dir, path) = temp_file("config.toml", "[player\nframe_rate = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn standalone_timeline_file_parses_both_pattern_forms() {
    let (_dir, path) = temp_file(
        "timeline.toml",
        r#"
[[segments]]
id = "burst"
start = 0.5
end = 0.6
pattern = 250
name = "Burst"
intensity = "LOW"

[[segments]]
id = "pulse"
start = 1.0
end = 3.0
pattern = [400, 100, 400]
name = "Pulse"
"#,
    );

    let timeline = TimelineConfig::load_file(&path).unwrap();
    assert_eq!(timeline.segments[0].pattern, VibrationPattern::Sustained(250));
    assert_eq!(timeline.segments[0].intensity, Intensity::Low);
    assert_eq!(
        timeline.segments[1].pattern,
        VibrationPattern::Sequence(vec![400, 100, 400])
    );
    assert_eq!(timeline.segments[1].intensity, Intensity::Medium);

    let table = timeline.build_table().unwrap();
    assert_eq!(table.lookup(2.0).map(|s| s.id.as_str()), Some("pulse"));
}

#[test]
fn missing_timeline_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = TimelineConfig::load_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn invalid_timeline_surfaces_as_config_error() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[[timeline.segments]]
id = "dup"
start = 1.0
end = 2.0
pattern = 100
name = "One"

[[timeline.segments]]
id = "dup"
start = 3.0
end = 4.0
pattern = 100
name = "Two"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    let err = config.timeline.build_table().unwrap_err();
    assert!(matches!(err, ConfigError::Timeline(_)));
    assert!(err.to_string().contains("Duplicate segment id 'dup'"));
}
