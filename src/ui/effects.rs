//! Celebration effects: a one-shot confetti burst on a new high score.
//!
//! Particles are spawned by the main loop when a run ends on the session
//! record, aged every frame, and dropped once their lifetime is spent. The
//! effect never touches game state.

use crate::constants::CONFETTI_COUNT;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Downward pull on particles, rows per second squared.
const CONFETTI_GRAVITY: f64 = 14.0;

const GLYPHS: [char; 5] = ['*', '•', '✦', '▪', 'o'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

#[derive(Debug, Clone)]
pub struct ConfettiParticle {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    ch: char,
    color: Color,
    lifetime: f64,
    max_lifetime: f64,
}

impl ConfettiParticle {
    /// Advance the particle. Returns false once its lifetime is spent.
    pub fn update(&mut self, dt: f64) -> bool {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.vy += CONFETTI_GRAVITY * dt;
        self.lifetime += dt;
        self.lifetime <= self.max_lifetime
    }
}

/// Fire the burst: a 70-degree fan launched upward from just below the
/// middle of the screen.
pub fn spawn_confetti<R: Rng>(rng: &mut R, width: u16, height: u16) -> Vec<ConfettiParticle> {
    let origin_x = width as f64 / 2.0;
    let origin_y = height as f64 * 0.6;

    (0..CONFETTI_COUNT)
        .map(|_| {
            let angle = rng.gen_range(-35.0f64..35.0).to_radians();
            let speed = rng.gen_range(8.0..18.0);
            ConfettiParticle {
                x: origin_x + rng.gen_range(-2.0..2.0),
                y: origin_y,
                // Terminal cells are taller than wide; stretch horizontally
                vx: angle.sin() * speed * 2.0,
                vy: -angle.cos() * speed,
                ch: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: COLORS[rng.gen_range(0..COLORS.len())],
                lifetime: 0.0,
                max_lifetime: rng.gen_range(0.9..1.8),
            }
        })
        .collect()
}

/// Age particles, dropping the spent ones.
pub fn update_confetti(particles: &mut Vec<ConfettiParticle>, dt: f64) {
    particles.retain_mut(|p| p.update(dt));
}

/// Stamp live particles over whatever is already drawn.
pub fn render_confetti(frame: &mut Frame, area: Rect, particles: &[ConfettiParticle]) {
    for p in particles {
        let x = p.x.round() as i64;
        let y = p.y.round() as i64;
        if x < 0 || y < 0 || x >= area.width as i64 || y >= area.height as i64 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                p.ch.to_string(),
                Style::default().fg(p.color),
            )),
            Rect::new(area.x + x as u16, area.y + y as u16, 1, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_count_and_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let particles = spawn_confetti(&mut rng, 80, 24);

        assert_eq!(particles.len(), CONFETTI_COUNT);
        for p in &particles {
            // Launched upward, within the fan
            assert!(p.vy < 0.0);
            assert!(p.max_lifetime > 0.0);
        }
    }

    #[test]
    fn test_particle_moves_and_falls() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut particles = spawn_confetti(&mut rng, 80, 24);
        let mut p = particles.remove(0);
        let y_before = p.y;
        let vy_before = p.vy;

        assert!(p.update(0.1));

        assert!(p.y < y_before, "particle should rise initially");
        assert!(p.vy > vy_before, "gravity should bleed off upward speed");
    }

    #[test]
    fn test_particle_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut particles = spawn_confetti(&mut rng, 80, 24);
        let mut p = particles.remove(0);

        assert!(!p.update(5.0), "particle should expire past its lifetime");
    }

    #[test]
    fn test_update_confetti_drains_burst() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut particles = spawn_confetti(&mut rng, 80, 24);

        update_confetti(&mut particles, 1.5);
        let remaining = particles.len();
        assert!(remaining < CONFETTI_COUNT, "short-lived particles drop out");

        update_confetti(&mut particles, 1.0);
        assert!(particles.is_empty(), "burst fully drains");
    }

    #[test]
    fn test_spawn_deterministic_with_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let pa = spawn_confetti(&mut a, 80, 24);
        let pb = spawn_confetti(&mut b, 80, 24);

        for (x, y) in pa.iter().zip(pb.iter()) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.y, y.y);
        }
    }
}
