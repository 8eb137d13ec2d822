/// Collision detection for projectiles and enemies
///
/// Hits are tested with circle-vs-circle distance: a bullet hits an enemy when
/// the distance between their centres is less than the sum of their hit radii.
///
/// # Architecture
///
/// - `Collidable` trait: anything with a centre point and a hit radius
/// - `circles_overlap()`: Pure distance test
/// - `resolve_bullet_hits()`: One collision pass over the live bullets and enemies
use crate::game::entities::{Bullet, Enemy};

/// Trait for entities that take part in hit detection.
///
/// # Example
///
/// ```rust
/// impl Collidable for Bullet {
///     fn center(&self) -> (f32, f32) {
///         (self.x, self.y)
///     }
///
///     fn hit_radius(&self) -> f32 {
///         self.radius
///     }
/// }
/// ```
pub trait Collidable {
    /// Centre point in surface coordinates
    fn center(&self) -> (f32, f32);

    /// Radius of the circle used for hit testing
    fn hit_radius(&self) -> f32;
}

/// Checks whether two collidables overlap.
///
/// Touching exactly at the rim is not a hit (strict less-than).
pub fn circles_overlap(a: &impl Collidable, b: &impl Collidable) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let distance = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
    distance < a.hit_radius() + b.hit_radius()
}

/// Runs one collision pass and removes every bullet and enemy that hit.
///
/// Bullets are processed in list order. Each bullet is tested against the
/// enemies still alive at that moment, in enemy list order; the first enemy it
/// overlaps is destroyed along with the bullet and no further enemies are
/// tested for it. An enemy destroyed by an earlier bullet is already gone, so
/// it can never be counted twice.
///
/// Returns the number of enemies destroyed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, enemies: &mut Vec<Enemy>) -> usize {
    let mut destroyed = 0;

    bullets.retain(|bullet| match enemies.iter().position(|enemy| circles_overlap(bullet, enemy)) {
        Some(index) => {
            enemies.remove(index);
            destroyed += 1;
            false
        }
        None => true,
    });

    destroyed
}
