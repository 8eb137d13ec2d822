// Screen state machine
//
// Exactly one screen is active. Each frame the driver calls `update` then
// `render`; both match on the active screen and run only that screen's code.

use super::draw::draw_session;
use super::session::{Controls, Session};
use crate::audio::SoundBank;
use crate::config::GameConfig;
use crate::gui::{
    render_quit_message, GameOverChoice, GameOverScreen, Instructions, MainMenu, MenuChoice,
    ShapeSelect, ShapeSelectAction,
};
use crate::input_system::InputState;
use crate::shapes::ShapeKind;
use crate::ui::Hud;
use rand::Rng;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Instant;

/// The active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ShapeSelect,
    Instructions,
    Play,
    GameOver,
    /// Soft stop after Quit: nothing updates, a closing message is shown
    Quit,
}

/// Owns every screen plus the current session and routes frames to the active one
pub struct ScreenController {
    screen: Screen,
    config: GameConfig,
    menu: MainMenu,
    shape_select: ShapeSelect,
    instructions: Instructions,
    game_over: GameOverScreen,
    hud: Hud,
    session: Option<Session>,
    /// Last shape confirmed on the selection screen, reused by Restart
    player_shape: ShapeKind,
}

impl ScreenController {
    pub fn new(config: GameConfig) -> Self {
        ScreenController {
            screen: Screen::Menu,
            menu: MainMenu::new(config.width, config.height),
            shape_select: ShapeSelect::new(config.width, config.height),
            instructions: Instructions::new(config.width),
            game_over: GameOverScreen::new(config.width, config.height),
            hud: Hud::new(),
            session: None,
            player_shape: ShapeKind::Circle,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// `true` once Quit was chosen; the driver stops calling `update`
    pub fn is_halted(&self) -> bool {
        self.screen == Screen::Quit
    }

    /// Runs the active screen's input handling and logic for one frame
    ///
    /// Returns `true` if the active screen changed.
    pub fn update(&mut self, input: &InputState, now: Instant, rng: &mut impl Rng, sounds: &SoundBank) -> bool {
        let next = match self.screen {
            Screen::Menu => match self.menu.update(input) {
                Some(MenuChoice::Play) => {
                    self.shape_select.reset();
                    Some(Screen::ShapeSelect)
                }
                Some(MenuChoice::Instructions) => Some(Screen::Instructions),
                Some(MenuChoice::Quit) => Some(Screen::Quit),
                None => None,
            },
            Screen::ShapeSelect => match self.shape_select.update(input) {
                Some(ShapeSelectAction::Confirm(shape)) => {
                    self.player_shape = shape;
                    self.start_session(now);
                    Some(Screen::Play)
                }
                Some(ShapeSelectAction::Quit) => Some(Screen::Quit),
                None => None,
            },
            Screen::Instructions => {
                if self.instructions.update(input) {
                    Some(Screen::Menu)
                } else {
                    None
                }
            }
            Screen::Play => self.update_play(input, now, rng, sounds),
            Screen::GameOver => match self.game_over.update(input) {
                Some(GameOverChoice::Restart) => {
                    self.start_session(now);
                    Some(Screen::Play)
                }
                Some(GameOverChoice::MainMenu) => {
                    self.session = None;
                    Some(Screen::Menu)
                }
                Some(GameOverChoice::Quit) => Some(Screen::Quit),
                None => None,
            },
            Screen::Quit => None,
        };

        match next {
            Some(screen) if screen != self.screen => {
                log::info!("Screen {:?} -> {:?}", self.screen, screen);
                if screen == Screen::Quit {
                    log::info!("Quit requested, halting updates");
                }
                self.screen = screen;
                true
            }
            _ => false,
        }
    }

    fn update_play(&mut self, input: &InputState, now: Instant, rng: &mut impl Rng, sounds: &SoundBank) -> Option<Screen> {
        let Some(session) = self.session.as_mut() else {
            log::warn!("Play screen without a session, returning to menu");
            return Some(Screen::Menu);
        };

        let report = session.tick(Controls::from_input(input), now, rng);
        sounds.play_events(&report.events);

        if report.is_game_over() {
            self.game_over.show(session.score());
            Some(Screen::GameOver)
        } else {
            None
        }
    }

    /// Fresh session with the confirmed shape at the start position
    fn start_session(&mut self, now: Instant) {
        log::info!("Starting session as {}", self.player_shape.name());
        self.session = Some(Session::new(&self.config, self.player_shape, now));
    }

    /// Draws the active screen
    pub fn render(&self, canvas: &mut Canvas<Window>, input: &InputState) -> Result<(), String> {
        match self.screen {
            Screen::Menu => self.menu.render(canvas, input),
            Screen::ShapeSelect => self.shape_select.render(canvas, input),
            Screen::Instructions => self.instructions.render(canvas),
            Screen::Play => match self.session() {
                Some(session) => draw_session(canvas, session, &self.hud),
                None => Ok(()),
            },
            Screen::GameOver => self.game_over.render(canvas, input),
            Screen::Quit => render_quit_message(canvas, self.config.width, self.config.height),
        }
    }
}
