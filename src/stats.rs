//! Health and lives bookkeeping
//!
//! The player has a health pool that is refilled each time a life is spent.
//! Running out of health costs one life; running out of lives ends the
//! session.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **NewType Pattern**: `Health` keeps `current` inside `0..=max` at all times
//! - **Enums for outcomes**: `DamageOutcome` replaces a pair of booleans

/// A clamped health pool
///
/// # Example
///
/// ```rust
/// let mut health = Health::new(100);
/// health.take_damage(34);
/// assert_eq!(health.current(), 66);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Creates a full health pool
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Health { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    /// Health as a fraction in `0.0..=1.0`, for the HUD bar
    pub fn percentage(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    /// Removes `amount` health, never going below zero
    ///
    /// Returns `true` if the pool is now empty.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current = (self.current - amount.max(0)).max(0);
        self.current == 0
    }

    pub fn restore_full(&mut self) {
        self.current = self.max;
    }
}

/// What a hit did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health went down but stayed above zero
    Survived,
    /// Health ran out; a life was spent and health refilled
    LifeLost { lives_left: u32 },
    /// Health ran out on the last life
    OutOfLives,
}

/// Health pool plus remaining lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    pub health: Health,
    lives: u32,
}

impl Vitals {
    pub fn new(max_health: i32, lives: u32) -> Self {
        Vitals {
            health: Health::new(max_health),
            lives,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Applies damage and resolves life loss
    ///
    /// # Example
    ///
    /// ```rust
    /// let mut vitals = Vitals::new(100, 3);
    /// vitals.apply_damage(34);
    /// vitals.apply_damage(34);
    /// assert_eq!(vitals.apply_damage(34), DamageOutcome::LifeLost { lives_left: 2 });
    /// assert_eq!(vitals.health.current(), 100);
    /// ```
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.health.take_damage(amount) {
            return DamageOutcome::Survived;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            DamageOutcome::OutOfLives
        } else {
            self.health.restore_full();
            DamageOutcome::LifeLost { lives_left: self.lives }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_never_goes_negative() {
        let mut health = Health::new(100);
        assert!(health.take_damage(150));
        assert_eq!(health.current(), 0);
        assert_eq!(health.percentage(), 0.0);
    }

    #[test]
    fn test_health_percentage() {
        let mut health = Health::new(100);
        health.take_damage(34);
        assert_eq!(health.current(), 66);
        assert!((health.percentage() - 0.66).abs() < 0.0001);
    }

    #[test]
    fn test_negative_damage_is_ignored() {
        let mut health = Health::new(100);
        health.take_damage(-20);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn test_three_escapes_cost_a_life() {
        let mut vitals = Vitals::new(100, 3);
        assert_eq!(vitals.apply_damage(34), DamageOutcome::Survived);
        assert_eq!(vitals.apply_damage(34), DamageOutcome::Survived);
        assert_eq!(vitals.apply_damage(34), DamageOutcome::LifeLost { lives_left: 2 });
        assert_eq!(vitals.health.current(), 100);
        assert_eq!(vitals.lives(), 2);
    }

    #[test]
    fn test_last_life_ends_with_empty_health() {
        let mut vitals = Vitals::new(10, 1);
        assert_eq!(vitals.apply_damage(10), DamageOutcome::OutOfLives);
        assert_eq!(vitals.lives(), 0);
        assert_eq!(vitals.health.current(), 0);
    }
}
