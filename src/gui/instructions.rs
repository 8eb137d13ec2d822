//! How-to-play screen; Escape returns to the title screen

use crate::input_system::{InputState, Key};
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const LINES: [&str; 6] = [
    "LEFT / RIGHT OR A / D - MOVE",
    "SPACE - SHOOT",
    "DESTROY ENEMIES FOR 10 POINTS EACH",
    "ENEMIES THAT REACH THE BOTTOM HURT YOU",
    "LOSE ALL HEALTH AND YOU LOSE A LIFE",
    "ENEMIES SPEED UP EVERY 10 SECONDS",
];

pub struct Instructions {
    center_x: i32,
}

impl Instructions {
    pub fn new(screen_width: u32) -> Self {
        Instructions {
            center_x: screen_width as i32 / 2,
        }
    }

    /// Returns `true` on the frame Escape goes down
    pub fn update(&self, input: &InputState) -> bool {
        input.just_pressed(Key::Back)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_text_centered(canvas, "INSTRUCTIONS", self.center_x, 150, Color::RGB(0, 200, 255), 8)?;

        for (i, line) in LINES.iter().enumerate() {
            draw_text_centered(canvas, line, self.center_x, 320 + i as i32 * 70, Color::RGB(230, 230, 230), 4)?;
        }

        draw_text_centered(canvas, "PRESS ESC TO GO BACK", self.center_x, 900, Color::RGB(150, 150, 160), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Scancode;

    #[test]
    fn test_escape_edge_returns_once() {
        let screen = Instructions::new(1920);
        let mut input = InputState::new();

        input.press_key(Scancode::Escape);
        assert!(screen.update(&input));

        // Still held on the next frame
        input.clear_key_edges();
        assert!(!screen.update(&input));
    }
}
