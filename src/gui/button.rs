//! Clickable Button Component
//!
//! A rectangular button with a centred bitmap-text label. Buttons highlight
//! while the cursor is over them and report a click on the frame the left
//! mouse button goes down inside them.

use crate::input_system::InputState;
use crate::text::{draw_text_centered, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill color when idle
    pub background_color: Color,

    /// Fill color while hovered
    pub hover_color: Color,

    pub border_color: Color,

    pub text_color: Color,

    /// Bitmap font scale for the label
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(30, 30, 40),
            hover_color: Color::RGB(80, 100, 140),
            border_color: Color::RGB(160, 160, 180),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 4,
        }
    }
}

/// A labelled, clickable rectangle
///
/// # Example
///
/// ```rust
/// let play = Button::centered("PLAY", 960, 400, 400, 90);
///
/// // In update
/// if play.clicked(&input) { /* ... */ }
///
/// // In render
/// play.render(&mut canvas, &input)?;
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    label: String,
    style: ButtonStyle,
}

impl Button {
    pub fn new(label: &str, rect: Rect) -> Self {
        Button {
            rect,
            label: label.to_string(),
            style: ButtonStyle::default(),
        }
    }

    /// Button of the given size, horizontally centred on `center_x`
    pub fn centered(label: &str, center_x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(label, Rect::new(center_x - width as i32 / 2, y, width, height))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self, input: &InputState) -> bool {
        self.rect.contains_point(input.mouse_position())
    }

    /// Left button went down over this button this frame
    pub fn clicked(&self, input: &InputState) -> bool {
        input.just_clicked() && self.is_hovered(input)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, input: &InputState) -> Result<(), String> {
        let fill = if self.is_hovered(input) {
            self.style.hover_color
        } else {
            self.style.background_color
        };

        canvas.set_draw_color(fill);
        canvas.fill_rect(self.rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(self.rect)?;

        let text_height = (GLYPH_HEIGHT * self.style.text_scale) as i32;
        let center = self.rect.center();
        draw_text_centered(
            canvas,
            self.label(),
            center.x(),
            center.y() - text_height / 2,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}
