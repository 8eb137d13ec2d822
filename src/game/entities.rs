//! Player, projectile and enemy data
//!
//! Entities are plain data. Movement and lifetime rules live in
//! [`super::session::Session::tick`]; drawing lives in `super::draw`.

use crate::collision::Collidable;
use crate::shapes::ShapeKind;

/// The player-controlled shape, anchored at its centre
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub shape: ShapeKind,
}

impl Player {
    pub fn new(x: f32, y: f32, radius: f32, speed: f32, shape: ShapeKind) -> Self {
        Player {
            x,
            y,
            radius,
            speed,
            shape,
        }
    }

    /// Moves horizontally by `direction * speed` and keeps the whole shape on screen
    ///
    /// `direction` is -1.0 (left), 0.0 or 1.0 (right).
    pub fn step(&mut self, direction: f32, surface_width: f32) {
        self.x = (self.x + direction * self.speed).clamp(self.radius, surface_width - self.radius);
    }
}

/// A projectile fired by the player, anchored at its centre
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Bullet { x, y, radius }
    }

    /// Past the top edge of the surface
    pub fn is_off_screen(&self) -> bool {
        self.y < 0.0
    }
}

impl Collidable for Bullet {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn hit_radius(&self) -> f32 {
        self.radius
    }
}

/// A descending enemy square, anchored at its top-left corner
///
/// Enemies die to a single hit, so there is no health field.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Enemy { x, y, size }
    }

    /// Passed the bottom edge of a surface `surface_height` tall
    pub fn has_escaped(&self, surface_height: f32) -> bool {
        self.y > surface_height
    }
}

impl Collidable for Enemy {
    fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    fn hit_radius(&self) -> f32 {
        self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_clamps_at_both_edges() {
        let mut player = Player::new(35.0, 980.0, 30.0, 8.0, ShapeKind::Circle);
        player.step(-1.0, 1920.0);
        assert_eq!(player.x, 30.0);

        player.x = 1885.0;
        player.step(1.0, 1920.0);
        assert_eq!(player.x, 1890.0);
    }

    #[test]
    fn test_enemy_center_is_offset_from_corner() {
        let enemy = Enemy::new(10.0, -40.0, 40.0);
        assert_eq!(enemy.center(), (30.0, -20.0));
        assert_eq!(enemy.hit_radius(), 20.0);
    }

    #[test]
    fn test_escape_and_off_screen_boundaries() {
        assert!(!Enemy::new(0.0, 1080.0, 40.0).has_escaped(1080.0));
        assert!(Enemy::new(0.0, 1080.5, 40.0).has_escaped(1080.0));
        assert!(!Bullet::new(0.0, 0.0, 5.0).is_off_screen());
        assert!(Bullet::new(0.0, -0.1, 5.0).is_off_screen());
    }
}
