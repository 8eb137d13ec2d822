//! Screen-Space GUI System
//!
//! Full-screen pages and the widgets they are built from. Every page follows
//! the same shape:
//! - `update(&input)` reads this frame's sampled input and returns what the
//!   player chose, if anything
//! - `render(&mut canvas, ...)` draws the page with SDL2 primitives
//!
//! Pages never switch screens themselves; the screen controller in
//! `game::screen` acts on their return values.
//!
//! # Available Components
//!
//! - `button::Button` - Clickable labelled rectangle
//! - [`MainMenu`] - Title screen
//! - [`ShapeSelect`] - Player shape picker
//! - [`Instructions`] - How-to-play page
//! - [`GameOverScreen`] - Final score with restart options
//! - [`render_quit_message`] - Terminal page after Quit

pub mod button;
pub mod game_over;
pub mod instructions;
pub mod main_menu;
pub mod shape_select;

pub use game_over::{GameOverChoice, GameOverScreen};
pub use instructions::Instructions;
pub use main_menu::{MainMenu, MenuChoice};
pub use shape_select::{ShapeSelect, ShapeSelectAction};

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Draws the page shown after Quit; the game no longer updates
pub fn render_quit_message(canvas: &mut Canvas<Window>, screen_width: u32, screen_height: u32) -> Result<(), String> {
    let center_x = screen_width as i32 / 2;
    let center_y = screen_height as i32 / 2;
    draw_text_centered(canvas, "THANKS FOR PLAYING!", center_x, center_y - 60, Color::RGB(255, 255, 255), 8)?;
    draw_text_centered(canvas, "YOU CAN CLOSE THIS WINDOW", center_x, center_y + 40, Color::RGB(150, 150, 160), 4)
}
