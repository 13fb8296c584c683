//! Fleet layout: a grid of aliens sized to the screen.

use crate::settings::Settings;
use crate::sprites::{Alien, ALIEN_SIZE, SHIP_SIZE};

/// Number of (columns, rows) that fit the screen, leaving a margin of
/// one alien width on each side, one alien height at the top, and room
/// for the ship plus two alien heights at the bottom. Each alien takes
/// the width (and height) of two: one for itself, one for the gap.
pub fn fleet_grid(
    screen_w: f32,
    screen_h: f32,
    alien_w: f32,
    alien_h: f32,
    ship_h: f32,
) -> (usize, usize) {
    let available_x = screen_w - 2.0 * alien_w;
    let available_y = screen_h - 3.0 * alien_h - ship_h;
    let columns = (available_x / (2.0 * alien_w)).floor().max(0.0) as usize;
    let rows = (available_y / (2.0 * alien_h)).floor().max(0.0) as usize;
    (columns, rows)
}

/// Build the fleet for the configured screen. A screen too small for
/// any alien yields an empty fleet, not an error.
pub fn build_fleet(settings: &Settings) -> Vec<Alien> {
    let (alien_w, alien_h) = ALIEN_SIZE;
    let (columns, rows) = fleet_grid(
        settings.screen_width,
        settings.screen_height,
        alien_w,
        alien_h,
        SHIP_SIZE.1,
    );
    let mut fleet = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        for col in 0..columns {
            fleet.push(Alien::new(
                alien_w + 2.0 * alien_w * col as f32,
                alien_h + 2.0 * alien_h * row as f32,
            ));
        }
    }
    fleet
}
