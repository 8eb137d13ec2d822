//! Play-screen heads-up display: health bar, score, level and lives

use super::HealthBar;
use crate::game::session::Session;
use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const MARGIN: i32 = 20;
const TEXT_SCALE: u32 = 4;
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

pub struct Hud {
    health_bar: HealthBar,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            health_bar: HealthBar::new(),
        }
    }

    /// HUD lines in top-to-bottom order
    pub fn lines(session: &Session) -> [String; 3] {
        [
            format!("SCORE: {}", session.score()),
            format!("LEVEL: {}", session.level()),
            format!("LIVES: {}", session.vitals.lives()),
        ]
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, session: &Session) -> Result<(), String> {
        self.health_bar
            .render(canvas, MARGIN, MARGIN, session.vitals.health.percentage())?;

        let line_height = 12 * TEXT_SCALE as i32;
        let first_line_y = MARGIN + self.health_bar.style().height as i32 + MARGIN;

        for (i, line) in Hud::lines(session).iter().enumerate() {
            draw_text(
                canvas,
                line,
                MARGIN,
                first_line_y + i as i32 * line_height,
                TEXT_COLOR,
                TEXT_SCALE,
            )?;
        }

        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
