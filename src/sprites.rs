//! The three play-field entities and their shared capability trait.

use ratatui::style::Color;

use crate::canvas::Canvas;
use crate::geom::Rect;
use crate::settings::Settings;

/// Logical size of the ship.
pub const SHIP_SIZE: (f32, f32) = (18.0, 12.0);
/// Logical size of one alien.
pub const ALIEN_SIZE: (f32, f32) = (14.0, 10.0);
/// Logical size of a bullet.
pub const BULLET_SIZE: (f32, f32) = (2.0, 8.0);

const SHIP_COLOR: Color = Color::Rgb(80, 255, 80);
const ALIEN_COLOR: Color = Color::Rgb(80, 255, 150);
const BULLET_COLOR: Color = Color::Rgb(255, 255, 200);

// Dot art on the braille grid, as offsets from the sprite's center.
const SHIP_DOTS: &[(i32, i32)] = &[
    (0, -3),
    (-1, -2), (0, -2), (1, -2),
    (-1, -1), (0, -1), (1, -1),
    (-3, 0), (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0), (3, 0),
    (-4, 1), (-3, 1), (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1), (3, 1), (4, 1),
    (-4, 2), (-3, 2), (-2, 2), (-1, 2), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2),
];

const ALIEN_DOTS: &[(i32, i32)] = &[
    (-1, -2), (1, -2),
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1),
    (-3, 0), (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0), (3, 0),
    (-3, 1), (-1, 1), (0, 1), (1, 1), (3, 1),
    (-2, 2), (-1, 2), (1, 2), (2, 2),
];

/// Positioned, updatable, drawable. Implemented by the ship, the
/// aliens, and the bullets.
pub trait Sprite {
    fn update(&mut self, settings: &Settings);
    fn rect(&self) -> Rect;
    fn draw(&self, canvas: &mut Canvas);
}

pub struct Ship {
    /// Left edge; a float so per-frame speed accumulates smoothly.
    pub x: f32,
    pub y: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Park the ship at the horizontal center of the bottom edge.
    pub fn center(&mut self, settings: &Settings) {
        self.x = (settings.screen_width - SHIP_SIZE.0) / 2.0;
        self.y = settings.screen_height - SHIP_SIZE.1;
    }
}

impl Sprite for Ship {
    fn update(&mut self, settings: &Settings) {
        // Boundary check on the current rect, not a post-move clamp: a
        // ship already flush against an edge stays put.
        if self.moving_right && self.rect().right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect().left() > 0.0 {
            self.x -= settings.ship_speed;
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, SHIP_SIZE.0, SHIP_SIZE.1)
    }

    fn draw(&self, canvas: &mut Canvas) {
        let rect = self.rect();
        canvas.stamp(SHIP_DOTS, rect.center_x(), rect.center_y(), SHIP_COLOR, true);
    }
}

pub struct Bullet {
    pub x: f32,
    /// Top edge; decreases every frame.
    pub y: f32,
}

impl Bullet {
    /// Spawn at the ship's mid-top.
    pub fn fire(ship: &Ship) -> Self {
        let ship_rect = ship.rect();
        Bullet {
            x: ship_rect.center_x() - BULLET_SIZE.0 / 2.0,
            y: ship_rect.top(),
        }
    }
}

impl Sprite for Bullet {
    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_SIZE.0, BULLET_SIZE.1)
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.rect(), BULLET_COLOR, true);
    }
}

pub struct Alien {
    pub x: f32,
    pub y: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32) -> Self {
        Alien { x, y }
    }

    /// True when the alien touches a horizontal screen edge.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.right() >= settings.screen_width || rect.left() <= 0.0
    }

    /// One step of the fleet's vertical descent.
    pub fn drop_down(&mut self, settings: &Settings) {
        self.y += settings.fleet_drop_speed;
    }
}

impl Sprite for Alien {
    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction;
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ALIEN_SIZE.0, ALIEN_SIZE.1)
    }

    fn draw(&self, canvas: &mut Canvas) {
        let rect = self.rect();
        canvas.stamp(ALIEN_DOTS, rect.center_x(), rect.center_y(), ALIEN_COLOR, false);
    }
}
