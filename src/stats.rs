//! Score, level, and lives tracking for the current session.

use crate::settings::Settings;

pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub ships_left: u32,
    /// Highest score this process has seen. Never persisted.
    pub high_score: u32,
    /// Gates all gameplay updates. False at launch and after the last
    /// ship is lost.
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            score: 0,
            level: 1,
            ships_left: settings.ship_limit,
            high_score: 0,
            game_active: false,
        }
    }

    /// Start-of-game reset. The high score survives.
    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }

    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
