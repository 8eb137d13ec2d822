//! HUD Components
//!
//! Stateless rendering components drawn over the play field:
//! - Use screen coordinates on the fixed 1920x1080 surface
//! - Are created once and rendered every frame
//! - Use procedural rendering (SDL2 primitives)
//!
//! # Available Components
//!
//! - [`HealthBar`] - Horizontal health bar with low-health coloring
//! - [`Hud`] - Health bar plus score, level and lives text

pub mod health_bar;
pub mod hud;

pub use health_bar::HealthBar;
pub use hud::Hud;
