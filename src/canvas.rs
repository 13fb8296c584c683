//! Braille sub-pixel drawing surface for the play field.
//!
//! Each terminal cell holds a 2x4 grid of braille dots. The canvas maps
//! logical field units onto that dot grid and emits styled lines for a
//! ratatui paragraph.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::geom::Rect;

pub struct Canvas {
    grid: Vec<Vec<(char, Style)>>,
    width: usize,
    height: usize,
    dots_w: i32,
    dots_h: i32,
    scale_x: f32,
    scale_y: f32,
}

impl Canvas {
    /// A blank surface of `width` x `height` cells covering a logical
    /// field of `field_w` x `field_h` units.
    pub fn new(width: usize, height: usize, field_w: f32, field_h: f32, bg: Color) -> Self {
        let dots_w = (width * 2) as i32;
        let dots_h = (height * 4) as i32;
        Self {
            grid: vec![vec![(' ', Style::default().bg(bg)); width]; height],
            width,
            height,
            dots_w,
            dots_h,
            scale_x: dots_w as f32 / field_w,
            scale_y: dots_h as f32 / field_h,
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&self, map: &mut HashMap<(usize, usize), u8>, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.dots_w || by >= self.dots_h {
            return;
        }
        let cx = bx as usize / 2;
        let cy = by as usize / 4;
        let sx = bx as usize % 2;
        let sy = by as usize % 4;
        *map.entry((cx, cy)).or_insert(0) |= Self::braille_bit(sx, sy);
    }

    fn write_layer(&mut self, map: &HashMap<(usize, usize), u8>, color: Color, bold: bool) {
        for (&(cx, cy), &bits) in map {
            if cx < self.width && cy < self.height && bits != 0 {
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                let mut style = self.grid[cy][cx].1.fg(color);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                self.grid[cy][cx] = (ch, style);
            }
        }
    }

    /// Stamp a dot-art shape centered at a logical position.
    pub fn stamp(&mut self, art: &[(i32, i32)], cx: f32, cy: f32, color: Color, bold: bool) {
        let mut map: HashMap<(usize, usize), u8> = HashMap::new();
        let bx = (cx * self.scale_x) as i32;
        let by = (cy * self.scale_y) as i32;
        for &(dx, dy) in art {
            self.set_dot(&mut map, bx + dx, by + dy);
        }
        self.write_layer(&map, color, bold);
    }

    /// Fill a logical rectangle with solid dots.
    pub fn fill_rect(&mut self, rect: Rect, color: Color, bold: bool) {
        let mut map: HashMap<(usize, usize), u8> = HashMap::new();
        let x0 = (rect.left() * self.scale_x) as i32;
        let y0 = (rect.top() * self.scale_y) as i32;
        let x1 = ((rect.right() * self.scale_x) as i32).max(x0 + 1);
        let y1 = ((rect.bottom() * self.scale_y) as i32).max(y0 + 1);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(&mut map, bx, by);
            }
        }
        self.write_layer(&map, color, bold);
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
