//! Flight scene rendering.
//!
//! Uses a cell buffer for per-character color control: sky, clouds, and the
//! rocket are drawn into a 2D grid and stamped as one Paragraph, with the
//! HUD and overlays rendered on top as widgets.

use crate::constants::{CLOUD_COUNT, VIRTUAL_HEIGHT};
use crate::game::types::{FlightGame, Phase};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

// ── Palette ─────────────────────────────────────────────────────────
const SKY_COLOR: Color = Color::Rgb(135, 206, 235);
const CLOUD_COLOR: Color = Color::Rgb(245, 245, 245);
const ROCKET_COLOR: Color = Color::Rgb(205, 60, 50);

/// Rocket glyph art, nose first, drawn bottom-anchored.
const ROCKET_SPRITE: [&str; 4] = [" ▲ ", "▟█▙", "▐█▌", "▞▀▚"];

/// Render the full scene for the current frame.
///
/// A degenerate area is skipped silently; the game simply is not drawn
/// until the terminal grows back.
pub fn render_scene<R: Rng>(frame: &mut Frame, area: Rect, game: &FlightGame, rng: &mut R) {
    if area.width < 12 || area.height < 6 {
        return;
    }

    let w = area.width as usize;
    let h = area.height as usize;

    let mut buffer = vec![vec![Cell::default(); w]; h];

    draw_clouds(&mut buffer, rng);
    draw_rocket(&mut buffer, game);

    let lines: Vec<Line> = buffer
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| {
                        Span::styled(
                            cell.ch.to_string(),
                            Style::default().fg(cell.fg).bg(cell.bg),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    render_hud(frame, area, game);

    match game.phase {
        Phase::Idle => render_start_prompt(frame, area, game),
        Phase::Active => {}
        Phase::GameOver => render_game_over(frame, area, game),
    }

    if game.config.boost_button {
        render_boost_button(frame, area);
    }
}

/// Screen rectangle of the boost button, for click hit-testing.
pub fn boost_button_rect(area: Rect) -> Rect {
    let width = 11u16.min(area.width);
    let height = 3u16.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width + 2),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

/// Cell in the render buffer. Defaults to empty sky.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: SKY_COLOR,
        }
    }
}

/// A handful of cloud blobs at fresh random positions every frame.
fn draw_clouds<R: Rng>(buffer: &mut [Vec<Cell>], rng: &mut R) {
    let h = buffer.len() as i32;
    let w = buffer[0].len() as i32;

    for _ in 0..CLOUD_COUNT {
        let cx = rng.gen_range(0..w);
        let cy = rng.gen_range(0..h);
        let half: i32 = rng.gen_range(2..=4);

        // Wide base row with a narrower crown above
        for dy in -1..=0i32 {
            let span = if dy == 0 { half } else { half / 2 };
            for dx in -span..=span {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && x < w && y >= 0 && y < h {
                    buffer[y as usize][x as usize] = Cell {
                        ch: ' ',
                        fg: Color::Reset,
                        bg: CLOUD_COLOR,
                    };
                }
            }
        }
    }
}

/// Stamp the rocket at its input-controlled altitude.
fn draw_rocket(buffer: &mut [Vec<Cell>], game: &FlightGame) {
    let h = buffer.len() as i32;
    let w = buffer[0].len() as i32;

    let sprite_h = ROCKET_SPRITE.len() as i32;
    let sprite_w = ROCKET_SPRITE[0].chars().count() as i32;

    // Virtual-pixel offset scaled to rows; the rest position sits on the
    // bottom edge. Rows that leave the top are simply not drawn.
    let offset_rows = (game.rocket_offset / VIRTUAL_HEIGHT * h as f64).round() as i32;
    let bottom = (h - 1) - offset_rows;
    let left = (w - sprite_w) / 2;

    for (i, art) in ROCKET_SPRITE.iter().enumerate() {
        let y = bottom - (sprite_h - 1 - i as i32);
        if y < 0 || y >= h {
            continue;
        }
        for (j, ch) in art.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let x = left + j as i32;
            if x < 0 || x >= w {
                continue;
            }
            buffer[y as usize][x as usize].ch = ch;
            buffer[y as usize][x as usize].fg = ROCKET_COLOR;
        }
    }

    // Exhaust flame while the run is live
    if game.phase == Phase::Active {
        let y = bottom + 1;
        if y >= 0 && y < h {
            let color = if (game.clock_ms / 100) % 2 == 0 {
                Color::LightYellow
            } else {
                Color::LightRed
            };
            for j in 0..sprite_w {
                let x = left + j;
                if x >= 0 && x < w {
                    buffer[y as usize][x as usize].ch = '^';
                    buffer[y as usize][x as usize].fg = color;
                }
            }
        }
    }
}

/// Score top-left, high score top-right.
fn render_hud(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let hud_style = Style::default()
        .fg(Color::White)
        .bg(SKY_COLOR)
        .add_modifier(Modifier::BOLD);

    let score = format!("Score: {}", game.display_score());
    let score_w = (score.len() as u16).min(area.width.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(score).style(hud_style),
        Rect::new(area.x + 1, area.y, score_w, 1),
    );

    let high = format!("High Score: {}", game.high_score);
    let high_w = (high.len() as u16).min(area.width.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(high).style(hud_style),
        Rect::new(
            area.x + area.width.saturating_sub(high_w + 1),
            area.y,
            high_w,
            1,
        ),
    );
}

/// Centered prompt on the start screen.
fn render_start_prompt(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let msg = if game.config.boost_button {
        "Tap the button to start flying!"
    } else {
        "Scroll to start flying!"
    };

    let width = (msg.len() as u16 + 6).min(area.width);
    let height = 3u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let modal = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    frame.render_widget(
        Paragraph::new(Span::styled(
            msg,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner,
    );
}

/// Centered game over modal with the run's result.
fn render_game_over(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let new_record = game.display_score() == game.high_score;

    let modal_width = 36u16.min(area.width);
    let modal_height = (if new_record { 9u16 } else { 7u16 }).min(area.height);
    let x = area.x + area.width.saturating_sub(modal_width) / 2;
    let y = area.y + area.height.saturating_sub(modal_height) / 2;
    let modal = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if new_record {
            Color::Yellow
        } else {
            Color::Red
        }));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", game.display_score()),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", game.high_score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    if new_record {
        lines.push(Line::from(Span::styled(
            "★ You have a new high score! ★",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[Enter] Play Again  [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Boxed boost button in the bottom-right corner.
fn render_boost_button(frame: &mut Frame, area: Rect) {
    let rect = boost_button_rect(area);
    if rect.width < 5 || rect.height < 3 {
        return;
    }

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "▲ BOOST",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner,
    );
}
