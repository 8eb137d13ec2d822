// Game module - Contains all gameplay logic and screen flow
//
// This module contains:
// - entities.rs: Player, Bullet and Enemy data
// - session.rs: One play-through and its per-frame update
// - draw.rs: Drawing the play field
// - screen.rs: Screen state machine (menu, shape select, play, ...)

pub mod draw;
pub mod entities;
pub mod screen;
pub mod session;

pub use screen::ScreenController;
