//! One play-through, from start to game over
//!
//! [`Session`] owns every piece of state that lives for a single run: the
//! player, live bullets and enemies, health, lives, score and the shoot
//! cooldown. Restarting means building a new `Session`, so nothing from the
//! previous run can leak into the next one.
//!
//! Time and randomness are passed in by the caller. The frame driver passes
//! `Instant::now()` and the thread RNG; tests pass fixed instants and mock RNGs.

use super::entities::{Bullet, Enemy, Player};
use crate::collision::resolve_bullet_hits;
use crate::config::GameConfig;
use crate::input_system::{InputState, Key};
use crate::shapes::ShapeKind;
use crate::stats::{DamageOutcome, Vitals};
use rand::Rng;
use std::time::{Duration, Instant};

/// Seconds of play per difficulty level
const SECONDS_PER_LEVEL: u64 = 10;
/// Spawn rate never drops below this many frames
const MIN_SPAWN_RATE: u32 = 5;
const BASE_SPAWN_RATE: u32 = 30;
/// Extra enemy speed per difficulty level
const SPEED_PER_LEVEL: f32 = 0.1;

/// Difficulty level for a given session age: 1 for the first ten seconds,
/// then one more every ten seconds
pub fn difficulty_level(elapsed: Duration) -> u32 {
    (elapsed.as_secs() / SECONDS_PER_LEVEL) as u32 + 1
}

/// Spawn rate for a level; one enemy appears every `rate + 1` frames on average
pub fn spawn_rate(level: u32) -> u32 {
    BASE_SPAWN_RATE
        .saturating_sub(level.saturating_mul(2))
        .max(MIN_SPAWN_RATE)
}

/// Downward enemy speed in pixels per frame
pub fn enemy_speed(base_speed: f32, level: u32) -> f32 {
    base_speed + level as f32 * SPEED_PER_LEVEL
}

/// Gameplay intent for one frame, read from held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

impl Controls {
    pub fn from_input(input: &InputState) -> Self {
        Controls {
            left: input.is_held(Key::Left),
            right: input.is_held(Key::Right),
            shoot: input.is_held(Key::Shoot),
        }
    }

    /// -1.0, 0.0 or 1.0; opposite keys cancel out
    fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Something that happened during a frame, used for audio cues and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Shot,
    EnemyDestroyed,
    EnemyEscaped,
    LifeLost { lives_left: u32 },
    GameOver { final_score: u32 },
}

/// Everything a frame produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    pub fn is_game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }

    #[cfg(test)]
    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

/// Live state of one play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub vitals: Vitals,
    score: u32,
    shoot_cooldown: u32,
    level: u32,
    started_at: Instant,
    finished: bool,
    config: GameConfig,
}

impl Session {
    /// Starts a fresh session with the player centred above the bottom edge
    pub fn new(config: &GameConfig, shape: ShapeKind, now: Instant) -> Self {
        let player = Player::new(
            config.width as f32 / 2.0,
            config.height as f32 - config.player_start_offset,
            config.player_radius,
            config.player_speed,
            shape,
        );

        Session {
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            vitals: Vitals::new(config.max_health, config.starting_lives),
            score: 0,
            shoot_cooldown: 0,
            level: 1,
            started_at: now,
            finished: false,
            config: config.clone(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Difficulty level as of the last tick
    pub fn level(&self) -> u32 {
        self.level
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the session by one frame
    ///
    /// Order matters and is fixed:
    /// 1. difficulty from elapsed time
    /// 2. player movement (clamped to the surface)
    /// 3. shooting and cooldown
    /// 4. bullet movement and culling
    /// 5. spawn roll
    /// 6. enemy movement and escapes (may end the session mid-pass)
    /// 7. bullet/enemy collisions and scoring
    ///
    /// Once the session has ended, further ticks do nothing.
    pub fn tick(&mut self, controls: Controls, now: Instant, rng: &mut impl Rng) -> FrameReport {
        let mut report = FrameReport::default();
        if self.finished {
            return report;
        }

        let width = self.config.width as f32;
        let height = self.config.height as f32;

        self.level = difficulty_level(now.saturating_duration_since(self.started_at));

        self.player.step(controls.direction(), width);

        if controls.shoot && self.shoot_cooldown == 0 {
            self.bullets.push(Bullet::new(
                self.player.x,
                self.player.y - self.player.radius,
                self.config.bullet_radius,
            ));
            self.shoot_cooldown = self.config.shoot_cooldown_frames;
            report.events.push(GameEvent::Shot);
        }
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);

        for bullet in &mut self.bullets {
            bullet.y -= self.config.bullet_speed;
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.roll_spawn(rng);

        if self.advance_enemies(height, &mut report) {
            return report;
        }

        let destroyed = resolve_bullet_hits(&mut self.bullets, &mut self.enemies);
        self.score += destroyed as u32 * self.config.score_per_kill;
        report
            .events
            .extend(std::iter::repeat(GameEvent::EnemyDestroyed).take(destroyed));

        report
    }

    /// One independent draw per frame, success chance `1 / (spawn_rate + 1)`
    fn roll_spawn(&mut self, rng: &mut impl Rng) {
        let chance = 1.0 / (spawn_rate(self.level) + 1) as f64;
        if !rng.gen_bool(chance) {
            return;
        }

        let size = self.config.enemy_size;
        let max_x = (self.config.width as f32 - size).max(0.0);
        let x = rng.gen_range(0.0..=max_x);
        self.enemies.push(Enemy::new(x, -size, size));
    }

    /// Moves enemies down and applies escape damage
    ///
    /// Returns `true` if the session ended, in which case the rest of the
    /// enemy list is left untouched for this frame.
    fn advance_enemies(&mut self, height: f32, report: &mut FrameReport) -> bool {
        let speed = enemy_speed(self.config.enemy_base_speed, self.level);

        let mut i = 0;
        while i < self.enemies.len() {
            self.enemies[i].y += speed;
            if !self.enemies[i].has_escaped(height) {
                i += 1;
                continue;
            }

            self.enemies.remove(i);
            report.events.push(GameEvent::EnemyEscaped);

            match self.vitals.apply_damage(self.config.enemy_escape_damage) {
                DamageOutcome::Survived => {
                    log::debug!("Enemy escaped, health {}", self.vitals.health.current());
                }
                DamageOutcome::LifeLost { lives_left } => {
                    log::info!("Life lost, {} remaining", lives_left);
                    report.events.push(GameEvent::LifeLost { lives_left });
                }
                DamageOutcome::OutOfLives => {
                    self.finished = true;
                    log::info!("Game over with score {}", self.score);
                    report.events.push(GameEvent::GameOver {
                        final_score: self.score,
                    });
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every roll succeeds and every range sample is its minimum
    fn always_spawn() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every roll fails
    fn never_spawn() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn new_session(now: Instant) -> Session {
        Session::new(&GameConfig::default(), ShapeKind::Circle, now)
    }

    const IDLE: Controls = Controls {
        left: false,
        right: false,
        shoot: false,
    };

    #[test]
    fn test_difficulty_steps_every_ten_seconds() {
        assert_eq!(difficulty_level(Duration::from_secs(0)), 1);
        assert_eq!(difficulty_level(Duration::from_millis(9_999)), 1);
        assert_eq!(difficulty_level(Duration::from_secs(10)), 2);
        assert_eq!(difficulty_level(Duration::from_secs(95)), 10);
    }

    #[test]
    fn test_spawn_rate_bottoms_out_at_five() {
        assert_eq!(spawn_rate(1), 28);
        assert_eq!(spawn_rate(12), 6);
        assert_eq!(spawn_rate(13), 5);
        assert_eq!(spawn_rate(500), 5);
    }

    #[test]
    fn test_new_session_starts_from_constants() {
        let session = new_session(Instant::now());
        assert_eq!(session.vitals.lives(), 3);
        assert_eq!(session.vitals.health.current(), 100);
        assert_eq!(session.score(), 0);
        assert_eq!((session.player.x, session.player.y), (960.0, 980.0));
        assert!(session.bullets.is_empty() && session.enemies.is_empty());
    }

    #[test]
    fn test_player_pinned_at_left_edge() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.player.x = session.player.radius;

        let left = Controls { left: true, ..IDLE };
        for _ in 0..50 {
            session.tick(left, now, &mut never_spawn());
            assert_eq!(session.player.x, session.player.radius);
        }
    }

    #[test]
    fn test_player_never_leaves_surface() {
        let now = Instant::now();
        let mut session = new_session(now);
        let right = Controls { right: true, ..IDLE };
        for _ in 0..500 {
            session.tick(right, now, &mut never_spawn());
        }
        assert_eq!(session.player.x, 1920.0 - session.player.radius);
    }

    #[test]
    fn test_held_shoot_fires_every_ten_frames() {
        let now = Instant::now();
        let mut session = new_session(now);
        let shoot = Controls { shoot: true, ..IDLE };

        let shots: usize = (0..30)
            .map(|_| session.tick(shoot, now, &mut never_spawn()).count(GameEvent::Shot))
            .sum();

        assert_eq!(shots, 3);
    }

    #[test]
    fn test_bullet_spawns_above_player_and_rises() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.tick(Controls { shoot: true, ..IDLE }, now, &mut never_spawn());

        let bullet = &session.bullets[0];
        assert_eq!(bullet.x, 960.0);
        // Spawned at y - radius, then moved once by bullet speed
        assert_eq!(bullet.y, 980.0 - 30.0 - 10.0);
    }

    #[test]
    fn test_bullets_are_dropped_past_the_top() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.bullets.push(Bullet::new(100.0, 5.0, 5.0));
        session.tick(IDLE, now, &mut never_spawn());
        assert!(session.bullets.is_empty());
    }

    #[test]
    fn test_spawned_enemy_starts_above_screen_and_descends() {
        let now = Instant::now();
        let mut session = new_session(now);

        session.tick(IDLE, now, &mut always_spawn());
        assert_eq!(session.enemies.len(), 1);
        let enemy = &session.enemies[0];
        // Spawned at -size then moved by base speed + level bonus
        assert!((enemy.y - (-40.0 + 3.1)).abs() < 0.0001);
        assert!(enemy.x >= 0.0 && enemy.x <= 1920.0 - 40.0);

        let y_before = enemy.y;
        session.tick(IDLE, now, &mut never_spawn());
        assert!(session.enemies[0].y > y_before);
    }

    #[test]
    fn test_seeded_spawns_stay_on_screen() {
        let now = Instant::now();
        let mut session = new_session(now);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2_000 {
            session.tick(IDLE, now, &mut rng);
            for enemy in &session.enemies {
                assert!(enemy.x >= 0.0 && enemy.x + enemy.size <= 1920.0);
            }
        }
    }

    #[test]
    fn test_escaped_enemy_damages_once() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.enemies.push(Enemy::new(100.0, 1079.0, 40.0));

        let report = session.tick(IDLE, now, &mut never_spawn());
        assert_eq!(report.count(GameEvent::EnemyEscaped), 1);
        assert!(session.enemies.is_empty());
        assert_eq!(session.vitals.health.current(), 66);

        session.tick(IDLE, now, &mut never_spawn());
        assert_eq!(session.vitals.health.current(), 66);
    }

    #[test]
    fn test_third_depletion_ends_session_and_keeps_score() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.score = 120;

        let mut lives_lost = Vec::new();
        let mut game_over = None;
        for _ in 0..9 {
            session.enemies.push(Enemy::new(100.0, 1079.0, 40.0));
            let report = session.tick(IDLE, now, &mut never_spawn());
            for event in report.events {
                match event {
                    GameEvent::LifeLost { lives_left } => lives_lost.push(lives_left),
                    GameEvent::GameOver { final_score } => game_over = Some(final_score),
                    _ => {}
                }
            }
        }

        assert_eq!(lives_lost, vec![2, 1]);
        assert_eq!(game_over, Some(120));
        assert!(session.is_finished());
        assert_eq!(session.vitals.lives(), 0);
        assert_eq!(session.score(), 120);
    }

    #[test]
    fn test_game_over_short_circuits_the_frame() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.vitals = Vitals::new(100, 1);
        session.vitals.health.take_damage(70);

        // First enemy escapes and ends the game; the second would be hit by
        // the bullet, but collisions never run this frame
        session.enemies.push(Enemy::new(100.0, 1079.0, 40.0));
        session.enemies.push(Enemy::new(500.0, 500.0, 40.0));
        session.bullets.push(Bullet::new(520.0, 540.0, 5.0));

        let report = session.tick(IDLE, now, &mut never_spawn());

        assert!(report.is_game_over());
        assert_eq!(report.count(GameEvent::EnemyDestroyed), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.enemies.len(), 1);
        assert_eq!(session.enemies[0].y, 500.0);

        // Finished sessions ignore further ticks
        assert!(session.tick(IDLE, now, &mut always_spawn()).events.is_empty());
        assert_eq!(session.enemies.len(), 1);
    }

    #[test]
    fn test_non_final_life_loss_keeps_processing_frame() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.vitals.health.take_damage(70);

        // Escapes first and costs a life; the rest of the frame still runs
        session.enemies.push(Enemy::new(100.0, 1079.0, 40.0));
        session.enemies.push(Enemy::new(500.0, 500.0, 40.0));
        session.enemies.push(Enemy::new(900.0, 500.0, 40.0));
        session.bullets.push(Bullet::new(520.0, 540.0, 5.0));

        let report = session.tick(IDLE, now, &mut never_spawn());

        assert_eq!(report.count(GameEvent::LifeLost { lives_left: 2 }), 1);
        assert!(!report.is_game_over());
        assert_eq!(report.count(GameEvent::EnemyDestroyed), 1);
        assert_eq!(session.score(), 10);
        assert_eq!(session.vitals.health.current(), 100);
        assert_eq!(session.enemies.len(), 1);
        assert!((session.enemies[0].y - 503.1).abs() < 0.0001);
        assert!(session.bullets.is_empty());
    }

    #[test]
    fn test_collision_awards_ten_points_per_enemy() {
        let now = Instant::now();
        let mut session = new_session(now);
        session.enemies.push(Enemy::new(500.0, 500.0, 40.0));
        session.enemies.push(Enemy::new(900.0, 500.0, 40.0));
        // Bullets move up 10 before the collision pass
        session.bullets.push(Bullet::new(520.0, 530.0, 5.0));
        session.bullets.push(Bullet::new(920.0, 530.0, 5.0));

        let report = session.tick(IDLE, now, &mut never_spawn());

        assert_eq!(report.count(GameEvent::EnemyDestroyed), 2);
        assert_eq!(session.score(), 20);
        assert!(session.enemies.is_empty());
        assert!(session.bullets.is_empty());
    }

    #[test]
    fn test_level_tracks_elapsed_time() {
        let start = Instant::now();
        let mut session = new_session(start);

        session.tick(IDLE, start + Duration::from_secs(25), &mut never_spawn());
        assert_eq!(session.level(), 3);

        session.enemies.push(Enemy::new(0.0, 0.0, 40.0));
        session.tick(IDLE, start + Duration::from_secs(25), &mut never_spawn());
        assert!((session.enemies[0].y - 3.3).abs() < 0.0001);
    }
}
