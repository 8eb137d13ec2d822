//! Game Over Screen Component
//!
//! Shown when the last life is lost. Displays the final score and offers
//! Restart, Main Menu and Quit.

use super::button::Button;
use crate::input_system::InputState;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// "GAME OVER" text color
    pub title_color: Color,

    /// Final score text color
    pub score_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            title_color: Color::RGB(255, 50, 50),
            score_color: Color::RGB(255, 255, 100),
        }
    }
}

/// What the player picked after losing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    MainMenu,
    Quit,
}

/// Game over screen holding the score of the session that just ended
///
/// # Example
///
/// ```rust
/// let mut game_over = GameOverScreen::new(1920, 1080);
///
/// // When the last life is lost
/// game_over.show(session.score());
///
/// // In update
/// match game_over.update(&input) {
///     Some(GameOverChoice::Restart) => { /* ... */ }
///     _ => {}
/// }
/// ```
pub struct GameOverScreen {
    final_score: u32,
    pub restart: Button,
    pub main_menu: Button,
    pub quit: Button,
    center_x: i32,
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let center_x = screen_width as i32 / 2;
        let first_y = screen_height as i32 / 2;

        GameOverScreen {
            final_score: 0,
            restart: Button::centered("RESTART", center_x, first_y, 480, 90),
            main_menu: Button::centered("MAIN MENU", center_x, first_y + 130, 480, 90),
            quit: Button::centered("QUIT", center_x, first_y + 260, 480, 90),
            center_x,
            style: GameOverStyle::default(),
        }
    }

    /// Records the score to display
    pub fn show(&mut self, final_score: u32) {
        self.final_score = final_score;
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    pub fn update(&self, input: &InputState) -> Option<GameOverChoice> {
        if self.restart.clicked(input) {
            Some(GameOverChoice::Restart)
        } else if self.main_menu.clicked(input) {
            Some(GameOverChoice::MainMenu)
        } else if self.quit.clicked(input) {
            Some(GameOverChoice::Quit)
        } else {
            None
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, input: &InputState) -> Result<(), String> {
        draw_text_centered(canvas, "GAME OVER", self.center_x, 220, self.style.title_color, 14)?;

        let score_text = format!("FINAL SCORE: {}", self.final_score());
        draw_text_centered(canvas, &score_text, self.center_x, 380, self.style.score_color, 6)?;

        self.restart.render(canvas, input)?;
        self.main_menu.render(canvas, input)?;
        self.quit.render(canvas, input)
    }
}
