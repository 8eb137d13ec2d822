//! Title screen with Play, Instructions and Quit

use super::button::Button;
use crate::input_system::InputState;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 520;
const BUTTON_HEIGHT: u32 = 90;
const BUTTON_GAP: i32 = 40;

/// What the player picked on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Instructions,
    Quit,
}

pub struct MainMenu {
    pub play: Button,
    pub instructions: Button,
    pub quit: Button,
    center_x: i32,
}

impl MainMenu {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let center_x = screen_width as i32 / 2;
        let first_y = screen_height as i32 / 2 - BUTTON_HEIGHT as i32;
        let step = BUTTON_HEIGHT as i32 + BUTTON_GAP;

        MainMenu {
            play: Button::centered("PLAY", center_x, first_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            instructions: Button::centered("INSTRUCTIONS", center_x, first_y + step, BUTTON_WIDTH, BUTTON_HEIGHT),
            quit: Button::centered("QUIT", center_x, first_y + step * 2, BUTTON_WIDTH, BUTTON_HEIGHT),
            center_x,
        }
    }

    pub fn update(&self, input: &InputState) -> Option<MenuChoice> {
        if self.play.clicked(input) {
            Some(MenuChoice::Play)
        } else if self.instructions.clicked(input) {
            Some(MenuChoice::Instructions)
        } else if self.quit.clicked(input) {
            Some(MenuChoice::Quit)
        } else {
            None
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, input: &InputState) -> Result<(), String> {
        draw_text_centered(canvas, "SHAPE SHOOTER", self.center_x, 200, Color::RGB(0, 200, 255), 12)?;

        self.play.render(canvas, input)?;
        self.instructions.render(canvas, input)?;
        self.quit.render(canvas, input)
    }
}
