use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::canvas::Canvas;
use crate::sprites::Sprite;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(100, 255, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, app, chunks[0]);
    render_field(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    if !app.stats.game_active {
        render_play_button(frame, app, chunks[1]);
    } else {
        app.play_button = None;
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let ships = "\u{25b2} ".repeat(app.stats.ships_left as usize);
    let status = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", app.stats.score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("High: {} ", app.stats.high_score),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Level: {} ", app.stats.level),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Ships: {}", ships),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_field(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let (r, g, b) = app.settings.bg_color;
    let mut canvas = Canvas::new(
        width,
        height,
        app.settings.screen_width,
        app.settings.screen_height,
        Color::Rgb(r, g, b),
    );
    for alien in &app.aliens {
        alien.draw(&mut canvas);
    }
    for bullet in &app.bullets {
        bullet.draw(&mut canvas);
    }
    app.ship.draw(&mut canvas);
    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = if !app.stats.game_active && app.stats.ships_left == 0 {
        Line::from(vec![
            Span::styled(
                " GAME OVER! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Click PLAY or press Enter for a new game",
                Style::default().fg(Color::Gray),
            ),
        ])
    } else if !app.stats.game_active {
        Line::from(vec![Span::styled(
            " Click PLAY or press Enter to start",
            Style::default().fg(Color::Gray),
        )])
    } else {
        Line::from(vec![
            Span::styled(" \u{2190}\u{2192} Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled(
                "Space Shoot ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}

/// Centered Play control; its cell rect is remembered for the mouse
/// hit test.
fn render_play_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = 20u16.min(area.width);
    let height = 5u16.min(area.height);
    if width == 0 || height == 0 {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let button = Rect::new(x, y, width, height);

    frame.render_widget(Clear, button);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(
            Style::default()
                .fg(Color::Rgb(80, 255, 80))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 25, 15)));
    let inner = block.inner(button);
    frame.render_widget(block, button);

    if inner.height > 0 {
        let label_row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        let label = Paragraph::new(Line::from(Span::styled(
            "PLAY",
            Style::default()
                .fg(Color::Rgb(100, 255, 100))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(label, label_row);
    }

    app.play_button = Some(button);
}
