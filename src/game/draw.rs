// Play-field rendering: player, bullets, enemies, then the HUD on top

use super::session::Session;
use crate::render::{draw_shape, fill_polygon, fill_rect_f};
use crate::shapes::ShapeKind;
use crate::ui::Hud;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const PLAYER_COLOR: Color = Color::RGB(0, 200, 255);
const BULLET_COLOR: Color = Color::RGB(255, 255, 0);

/// Enemy fill color; enemies get more menacing as difficulty climbs
pub fn enemy_color(level: u32) -> Color {
    if level < 5 {
        Color::RGB(255, 60, 60)
    } else if level < 10 {
        Color::RGB(255, 150, 0)
    } else {
        Color::RGB(180, 0, 255)
    }
}

pub fn draw_session(canvas: &mut Canvas<Window>, session: &Session, hud: &Hud) -> Result<(), String> {
    let player = &session.player;
    draw_shape(canvas, player.shape, player.x, player.y, player.radius, PLAYER_COLOR)?;

    for bullet in &session.bullets {
        let outline = ShapeKind::Circle.outline(bullet.x, bullet.y, bullet.radius);
        fill_polygon(canvas, &outline, BULLET_COLOR)?;
    }

    let color = enemy_color(session.level());
    for enemy in &session.enemies {
        fill_rect_f(canvas, enemy.x, enemy.y, enemy.size, enemy.size, color)?;
    }

    hud.render(canvas, session)
}
