use alien_invasion::fleet::{build_fleet, fleet_grid};
use alien_invasion::settings::Settings;
use alien_invasion::sprites::{Sprite, ALIEN_SIZE, SHIP_SIZE};

#[test]
fn grid_matches_the_layout_formula() {
    // 800x600 screen with 40x40 aliens and a 60-unit ship:
    // columns = (800 - 80) / 80, rows = (600 - 120 - 60) / 80
    assert_eq!(fleet_grid(800.0, 600.0, 40.0, 40.0, 60.0), (9, 5));
    // Odd remainders floor away
    assert_eq!(fleet_grid(810.0, 610.0, 40.0, 40.0, 60.0), (9, 5));
}

#[test]
fn grid_is_empty_when_the_screen_is_too_small() {
    assert_eq!(fleet_grid(100.0, 100.0, 40.0, 40.0, 20.0), (0, 0));
    // Narrow but tall: no columns means no aliens at all
    let (columns, _) = fleet_grid(70.0, 600.0, 40.0, 40.0, 20.0);
    assert_eq!(columns, 0);
}

#[test]
fn built_fleet_has_rows_times_columns_aliens() {
    let settings = Settings::default();
    let (columns, rows) = fleet_grid(
        settings.screen_width,
        settings.screen_height,
        ALIEN_SIZE.0,
        ALIEN_SIZE.1,
        SHIP_SIZE.1,
    );
    let fleet = build_fleet(&settings);
    assert!(!fleet.is_empty());
    assert_eq!(fleet.len(), columns * rows);
}

#[test]
fn fleet_respects_side_margins() {
    let settings = Settings::default();
    for alien in build_fleet(&settings) {
        let rect = alien.rect();
        assert!(rect.left() >= ALIEN_SIZE.0);
        assert!(rect.right() <= settings.screen_width - ALIEN_SIZE.0);
    }
}

#[test]
fn fleet_stays_clear_of_the_ship_band() {
    let settings = Settings::default();
    let ship_band_top = settings.screen_height - SHIP_SIZE.1;
    for alien in build_fleet(&settings) {
        assert!(alien.rect().bottom() < ship_band_top);
    }
}
