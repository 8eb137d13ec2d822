//! Shape selection screen
//!
//! The eight player shapes sit in one row. Clicking anywhere in a shape's
//! preview box selects it (the last click wins). Continue only appears once
//! something is selected, and confirms the choice.

use super::button::Button;
use crate::input_system::InputState;
use crate::render::draw_shape;
use crate::shapes::ShapeKind;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Horizontal distance between preview centres
const PREVIEW_SPACING: i32 = 200;
/// Side of the clickable box around each preview
const PREVIEW_BOX: u32 = 140;
/// Radius of the drawn preview shape
const PREVIEW_SIZE: f32 = 45.0;
const ROW_Y: i32 = 480;

/// What happened on the selection screen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSelectAction {
    /// Continue clicked with this shape selected
    Confirm(ShapeKind),
    Quit,
}

pub struct ShapeSelect {
    previews: Vec<(ShapeKind, Rect)>,
    selected: Option<ShapeKind>,
    pub continue_button: Button,
    pub quit: Button,
    center_x: i32,
}

impl ShapeSelect {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let center_x = screen_width as i32 / 2;
        let count = ShapeKind::ALL.len() as i32;
        let first_center = center_x - (count - 1) * PREVIEW_SPACING / 2;

        let previews = ShapeKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &shape)| {
                let cx = first_center + i as i32 * PREVIEW_SPACING;
                let rect = Rect::from_center((cx, ROW_Y), PREVIEW_BOX, PREVIEW_BOX);
                (shape, rect)
            })
            .collect();

        let bottom = screen_height as i32;
        ShapeSelect {
            previews,
            selected: None,
            continue_button: Button::centered("CONTINUE", center_x, bottom - 400, 440, 90),
            quit: Button::centered("QUIT", center_x, bottom - 270, 440, 90),
            center_x,
        }
    }

    pub fn selected(&self) -> Option<ShapeKind> {
        self.selected
    }

    /// Clears the selection so Continue is hidden again
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Clickable box for a shape's preview
    #[cfg(test)]
    pub fn preview_rect(&self, shape: ShapeKind) -> Option<Rect> {
        self.previews
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, rect)| *rect)
    }

    pub fn update(&mut self, input: &InputState) -> Option<ShapeSelectAction> {
        if !input.just_clicked() {
            return None;
        }

        let mouse = input.mouse_position();
        if let Some((shape, _)) = self.previews.iter().find(|(_, rect)| rect.contains_point(mouse)) {
            self.selected = Some(*shape);
            return None;
        }

        if let Some(shape) = self.selected() {
            if self.continue_button.clicked(input) {
                return Some(ShapeSelectAction::Confirm(shape));
            }
        }

        if self.quit.clicked(input) {
            return Some(ShapeSelectAction::Quit);
        }

        None
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, input: &InputState) -> Result<(), String> {
        draw_text_centered(canvas, "CHOOSE YOUR SHAPE", self.center_x, 200, Color::RGB(0, 200, 255), 8)?;

        for &(shape, rect) in &self.previews {
            let is_selected = self.selected() == Some(shape);
            if is_selected {
                canvas.set_draw_color(Color::RGB(80, 100, 140));
                canvas.fill_rect(rect)?;
            }
            canvas.set_draw_color(Color::RGB(100, 100, 120));
            canvas.draw_rect(rect)?;

            let center = rect.center();
            draw_shape(
                canvas,
                shape,
                center.x() as f32,
                center.y() as f32,
                PREVIEW_SIZE,
                Color::RGB(0, 200, 255),
            )?;
            draw_text_centered(
                canvas,
                shape.name(),
                center.x(),
                rect.bottom() + 20,
                Color::RGB(200, 200, 210),
                2,
            )?;
        }

        if self.selected.is_some() {
            self.continue_button.render(canvas, input)?;
        }
        self.quit.render(canvas, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn click_at(input: &mut InputState, x: i32, y: i32) {
        let now = Instant::now();
        input.set_mouse_button(false);
        input.finish_frame_sampling(now);
        input.move_mouse(x, y);
        input.set_mouse_button(true);
        input.finish_frame_sampling(now);
    }

    fn click_rect(input: &mut InputState, rect: Rect) {
        let center = rect.center();
        click_at(input, center.x(), center.y());
    }

    #[test]
    fn test_previews_form_one_centred_row() {
        let screen = ShapeSelect::new(1920, 1080);
        let first = screen.preview_rect(ShapeKind::Circle).unwrap();
        let last = screen.preview_rect(ShapeKind::Heart).unwrap();

        assert_eq!(first.center().y(), last.center().y());
        assert_eq!(first.center().x() + last.center().x(), 1920);
        assert!(first.left() >= 0 && last.right() <= 1920);
    }

    #[test]
    fn test_continue_is_inert_until_a_shape_is_picked() {
        let mut screen = ShapeSelect::new(1920, 1080);
        let mut input = InputState::new();

        click_rect(&mut input, screen.continue_button.rect);
        assert_eq!(screen.update(&input), None);
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn test_last_click_wins_then_continue_confirms() {
        let mut screen = ShapeSelect::new(1920, 1080);
        let mut input = InputState::new();

        click_rect(&mut input, screen.preview_rect(ShapeKind::Square).unwrap());
        assert_eq!(screen.update(&input), None);
        click_rect(&mut input, screen.preview_rect(ShapeKind::Star).unwrap());
        assert_eq!(screen.update(&input), None);
        assert_eq!(screen.selected(), Some(ShapeKind::Star));

        click_rect(&mut input, screen.continue_button.rect);
        assert_eq!(screen.update(&input), Some(ShapeSelectAction::Confirm(ShapeKind::Star)));
    }

    #[test]
    fn test_click_near_preview_edge_selects() {
        let mut screen = ShapeSelect::new(1920, 1080);
        let mut input = InputState::new();
        let rect = screen.preview_rect(ShapeKind::Cross).unwrap();

        click_at(&mut input, rect.left() + 2, rect.top() + 2);
        screen.update(&input);
        assert_eq!(screen.selected(), Some(ShapeKind::Cross));
    }

    #[test]
    fn test_reset_hides_continue_again() {
        let mut screen = ShapeSelect::new(1920, 1080);
        let mut input = InputState::new();
        click_rect(&mut input, screen.preview_rect(ShapeKind::Heart).unwrap());
        screen.update(&input);

        screen.reset();
        assert_eq!(screen.selected(), None);
    }
}
