//! Health bar component
//!
//! A horizontal bar drawn with SDL2 rectangles: dark background, colored fill
//! proportional to remaining health, thin border. The HUD draws one in the
//! top-left corner of the play screen.
//!
//! # Example
//!
//! ```rust
//! use crate::ui::HealthBar;
//!
//! let health_bar = HealthBar::new();
//! health_bar.render(&mut canvas, 20, 20, session.vitals.health.percentage())?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for health bar appearance
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Background bar color (shown where health is missing)
    pub background_color: Color,

    /// Fill color at or above the low-health threshold
    pub health_color: Color,

    /// Fill color below the low-health threshold
    pub low_health_color: Color,

    /// Fraction below which the low-health color is used
    pub low_health_threshold: f32,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 300,
            height: 30,
            background_color: Color::RGB(60, 60, 60),
            health_color: Color::RGB(0, 200, 0),
            low_health_color: Color::RGB(220, 0, 0),
            low_health_threshold: 0.3,
            border_color: Color::RGB(255, 255, 255),
            border_thickness: 2,
        }
    }
}

/// A stateless health bar; create once, render every frame
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    /// Creates a health bar with the default HUD styling (300x30, green/red)
    pub fn new() -> Self {
        Self::with_style(HealthBarStyle::default())
    }

    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Filled width in pixels for a health fraction (clamped to 0.0-1.0)
    pub fn fill_width(&self, health_percentage: f32) -> u32 {
        (self.style.width as f32 * health_percentage.clamp(0.0, 1.0)) as u32
    }

    /// Fill color for a health fraction
    pub fn fill_color(&self, health_percentage: f32) -> Color {
        if health_percentage < self.style.low_health_threshold {
            self.style.low_health_color
        } else {
            self.style.health_color
        }
    }

    /// Renders the bar with its top-left corner at (`x`, `y`)
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        health_percentage: f32,
    ) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(x, y, self.style.width, self.style.height))?;

        let fill_width = self.fill_width(health_percentage);
        if fill_width > 0 {
            canvas.set_draw_color(self.fill_color(health_percentage));
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.height))?;
        }

        // Border drawn last so it sits on top of the fill
        canvas.set_draw_color(self.style.border_color);
        for inset in 0..self.style.border_thickness {
            let inset_px = inset as i32;
            let width = self.style.width.saturating_sub(inset * 2);
            let height = self.style.height.saturating_sub(inset * 2);
            if width == 0 || height == 0 {
                break;
            }
            canvas.draw_rect(Rect::new(x + inset_px, y + inset_px, width, height))?;
        }

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}
