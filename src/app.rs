use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect as ScreenRect};

use crate::fleet;
use crate::settings::Settings;
use crate::sprites::{Alien, Bullet, Ship, Sprite};
use crate::stats::GameStats;

/// Ticks of enforced pause after losing a ship (~0.5 s at the 16 ms tick).
const HIT_PAUSE_TICKS: u32 = 30;
/// Without key-release reporting, a movement flag lapses this many
/// ticks after the last press or repeat refreshed it.
const KEY_HOLD_TICKS: u8 = 10;

/// Top-level controller: owns every piece of game state and receives
/// all input and tick events.
pub struct App {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub should_quit: bool,
    /// Cell rect of the Play control from the last render; hit-tested
    /// against clicks only while the game is inactive.
    pub play_button: Option<ScreenRect>,
    hit_pause: u32,
    release_events: bool,
    left_hold: u8,
    right_hold: u8,
}

impl App {
    /// `release_events` is whether the terminal reports key releases;
    /// without them movement flags fall back to a hold countdown.
    pub fn new(settings: Settings, release_events: bool) -> Self {
        let stats = GameStats::new(&settings);
        let ship = Ship::new(&settings);
        let aliens = fleet::build_fleet(&settings);
        App {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            aliens,
            should_quit: false,
            play_button: None,
            hit_pause: 0,
            release_events,
            left_hold: 0,
            right_hold: 0,
        }
    }

    /// True while the post-hit pause is counting down.
    pub fn paused(&self) -> bool {
        self.hit_pause > 0
    }

    pub fn on_tick(&mut self) {
        if self.hit_pause > 0 {
            // Frames keep rendering; gameplay stands still.
            self.hit_pause -= 1;
            return;
        }
        if !self.stats.game_active {
            return;
        }
        self.decay_key_holds();
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.on_key_down(key.code),
            KeyEventKind::Release => self.on_key_up(key.code),
        }
    }

    fn on_key_down(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Left => {
                self.ship.moving_left = true;
                self.left_hold = KEY_HOLD_TICKS;
            }
            KeyCode::Right => {
                self.ship.moving_right = true;
                self.right_hold = KEY_HOLD_TICKS;
            }
            KeyCode::Char(' ') => self.fire_bullet(),
            KeyCode::Enter => {
                if !self.stats.game_active {
                    self.start_game();
                }
            }
            _ => {}
        }
    }

    fn on_key_up(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.ship.moving_left = false;
                self.left_hold = 0;
            }
            KeyCode::Right => {
                self.ship.moving_right = false;
                self.right_hold = 0;
            }
            _ => {}
        }
    }

    /// Fallback for terminals that never report key releases: a
    /// movement flag lapses a few ticks after the last press or repeat.
    fn decay_key_holds(&mut self) {
        if self.release_events {
            return;
        }
        if self.ship.moving_left {
            self.left_hold = self.left_hold.saturating_sub(1);
            if self.left_hold == 0 {
                self.ship.moving_left = false;
            }
        }
        if self.ship.moving_right {
            self.right_hold = self.right_hold.saturating_sub(1);
            if self.right_hold == 0 {
                self.ship.moving_right = false;
            }
        }
    }

    pub fn on_click(&mut self, column: u16, row: u16) {
        if self.stats.game_active {
            return;
        }
        if let Some(button) = self.play_button {
            if button.contains(Position::new(column, row)) {
                self.start_game();
            }
        }
    }

    /// Begin a fresh game: dynamic settings and stats reset, field
    /// rebuilt, ship recentered.
    pub fn start_game(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset(&self.settings);
        self.stats.game_active = true;
        self.bullets.clear();
        self.aliens = fleet::build_fleet(&self.settings);
        self.ship.center(&self.settings);
        self.play_button = None;
        self.hit_pause = 0;
    }

    fn fire_bullet(&mut self) {
        if !self.stats.game_active || self.hit_pause > 0 {
            return;
        }
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::fire(&self.ship));
        }
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        // Gone once the bottom edge clears the top of the screen.
        self.bullets.retain(|bullet| bullet.rect().bottom() > 0.0);
        self.check_bullet_alien_collisions();
    }

    /// Each bullet destroys every alien it currently overlaps and is
    /// consumed if it destroyed at least one; an alien dies at most
    /// once because it is removed before later bullets are tested.
    fn check_bullet_alien_collisions(&mut self) {
        let mut destroyed = 0usize;
        let mut spent: Vec<usize> = Vec::new();
        for (i, bullet) in self.bullets.iter().enumerate() {
            let rect = bullet.rect();
            let before = self.aliens.len();
            self.aliens.retain(|alien| !rect.overlaps(&alien.rect()));
            let hits = before - self.aliens.len();
            if hits > 0 {
                destroyed += hits;
                spent.push(i);
            }
        }
        for &i in spent.iter().rev() {
            self.bullets.remove(i);
        }
        if destroyed > 0 {
            self.stats.score += self.settings.alien_points * destroyed as u32;
            self.stats.check_high_score();
        }
        if self.aliens.is_empty() {
            // Fleet wiped: next wave, faster.
            self.bullets.clear();
            self.settings.increase_speed();
            self.stats.level += 1;
            self.aliens = fleet::build_fleet(&self.settings);
        }
    }

    fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings);
        }
        let ship_rect = self.ship.rect();
        if self.aliens.iter().any(|alien| alien.rect().overlaps(&ship_rect)) {
            self.ship_hit();
            return;
        }
        self.check_aliens_bottom();
    }

    /// One drop-and-reverse per frame, no matter how many aliens touch
    /// an edge.
    fn check_fleet_edges(&mut self) {
        if self.aliens.iter().any(|alien| alien.check_edges(&self.settings)) {
            for alien in &mut self.aliens {
                alien.drop_down(&self.settings);
            }
            self.settings.fleet_direction = -self.settings.fleet_direction;
        }
    }

    /// An alien reaching the bottom edge counts as a ship hit.
    fn check_aliens_bottom(&mut self) {
        let bottom = self.settings.screen_height;
        if self.aliens.iter().any(|alien| alien.rect().bottom() >= bottom) {
            self.ship_hit();
        }
    }

    fn ship_hit(&mut self) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.bullets.clear();
            self.aliens = fleet::build_fleet(&self.settings);
            self.ship.center(&self.settings);
            self.hit_pause = HIT_PAUSE_TICKS;
        } else {
            self.stats.game_active = false;
        }
    }
}
