use std::fs;

use alien_invasion::settings::{Settings, SettingsError};

#[test]
fn defaults_are_valid() {
    Settings::default().validate().unwrap();
}

#[test]
fn rejects_non_positive_screen_dimensions() {
    let mut settings = Settings::default();
    settings.screen_width = 0.0;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ScreenSize { .. })
    ));

    let mut settings = Settings::default();
    settings.screen_height = -100.0;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ScreenSize { .. })
    ));
}

#[test]
fn rejects_a_zero_bullet_cap() {
    let mut settings = Settings::default();
    settings.bullets_allowed = 0;
    assert!(matches!(settings.validate(), Err(SettingsError::BulletCap)));
}

#[test]
fn rejects_a_zero_ship_limit() {
    let mut settings = Settings::default();
    settings.ship_limit = 0;
    assert!(matches!(settings.validate(), Err(SettingsError::ShipLimit)));
}

#[test]
fn rejects_shrinking_scale_factors() {
    let mut settings = Settings::default();
    settings.speedup_scale = 0.9;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::SpeedupScale(_))
    ));

    let mut settings = Settings::default();
    settings.score_scale = 0.5;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ScoreScale(_))
    ));
}

#[test]
fn error_messages_name_the_offending_value() {
    let mut settings = Settings::default();
    settings.screen_width = -5.0;
    let message = settings.validate().unwrap_err().to_string();
    assert!(message.contains("-5"));
}

#[test]
fn increase_speed_scales_multiplicatively() {
    let mut settings = Settings::default();
    let base_speed = settings.ship_speed;
    let base_points = settings.alien_points;

    settings.increase_speed();
    assert!((settings.ship_speed - base_speed * settings.speedup_scale).abs() < 1e-6);
    assert_eq!(
        settings.alien_points,
        (base_points as f32 * settings.score_scale) as u32
    );

    settings.initialize_dynamic_settings();
    assert_eq!(settings.ship_speed, base_speed);
    assert_eq!(settings.alien_points, base_points);
    assert_eq!(settings.fleet_direction, 1.0);
}

#[test]
fn ron_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    fs::write(&path, "(screen_width: 640.0, bullets_allowed: 5)").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.screen_width, 640.0);
    assert_eq!(settings.bullets_allowed, 5);
    assert_eq!(settings.screen_height, Settings::default().screen_height);
    // Dynamic values never come from the file
    assert_eq!(settings.ship_speed, Settings::default().ship_speed);
    assert_eq!(settings.fleet_direction, 1.0);
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.ron")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Settings::load(dir.path().join("absent.ron")),
        Err(SettingsError::Read { .. })
    ));
}

#[test]
fn invalid_values_in_a_file_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    fs::write(&path, "(bullets_allowed: 0)").unwrap();
    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::BulletCap)
    ));
}

#[test]
fn unparsable_files_are_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    fs::write(&path, "not ron at all {{{").unwrap();
    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::Parse { .. })
    ));
}
