use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Logical keys the game reacts to
///
/// Physical scancodes are mapped onto these so bindings stay in one place
/// and do not depend on the keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Shoot,
    Back,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Shoot, Key::Back];

    /// Physical keys bound to this game key (arrows or A/D, Space, Escape)
    pub fn scancodes(&self) -> &'static [Scancode] {
        match self {
            Key::Left => &[Scancode::Left, Scancode::A],
            Key::Right => &[Scancode::Right, Scancode::D],
            Key::Shoot => &[Scancode::Space],
            Key::Back => &[Scancode::Escape],
        }
    }

    /// Game key a physical key is bound to, if any
    pub fn from_scancode(scancode: Scancode) -> Option<Self> {
        Key::ALL
            .into_iter()
            .find(|key| key.scancodes().contains(&scancode))
    }
}

/// Sampled input for one frame
///
/// Events only update raw levels (held physical keys, mouse button, cursor).
/// A game key counts as held while any of its bound keys is down. Edges are
/// derived once per frame in [`InputState::finish_frame_sampling`], which the
/// frame driver calls after polling and before any screen handler runs. Every
/// handler that frame sees the same `just_clicked()` / `just_pressed()` answers.
///
/// # Example
///
/// ```rust
/// let mut input = InputState::new();
///
/// // Each frame
/// let window_closed = input.poll(&mut event_pump);
/// input.finish_frame_sampling(Instant::now());
///
/// if play_button.clicked(&input) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct InputState {
    held: HashSet<Scancode>,
    pressed_this_frame: HashSet<Scancode>,
    mouse_x: i32,
    mouse_y: i32,
    mouse_down: bool,
    mouse_was_down: bool,
    clicked: bool,
    clicks_blocked_until: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            held: HashSet::new(),
            pressed_this_frame: HashSet::new(),
            mouse_x: 0,
            mouse_y: 0,
            mouse_down: false,
            mouse_was_down: false,
            clicked: false,
            clicks_blocked_until: None,
        }
    }

    /// Drains pending SDL2 events into the raw input levels
    ///
    /// Returns `true` if the window was asked to close.
    pub fn poll(&mut self, event_pump: &mut EventPump) -> bool {
        let mut window_closed = false;
        self.clear_key_edges();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => window_closed = true,
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat,
                    ..
                } => {
                    if !repeat && Key::from_scancode(scancode).is_some() {
                        self.press_key(scancode);
                    }
                }
                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => {
                    self.release_key(scancode);
                }
                Event::MouseMotion { x, y, .. } => self.move_mouse(x, y),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.move_mouse(x, y);
                    self.set_mouse_button(true);
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.move_mouse(x, y);
                    self.set_mouse_button(false);
                }
                _ => {}
            }
        }

        window_closed
    }

    pub fn press_key(&mut self, scancode: Scancode) {
        if self.held.insert(scancode) {
            self.pressed_this_frame.insert(scancode);
        }
    }

    pub fn release_key(&mut self, scancode: Scancode) {
        self.held.remove(&scancode);
    }

    pub fn move_mouse(&mut self, x: i32, y: i32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    pub fn set_mouse_button(&mut self, down: bool) {
        self.mouse_down = down;
    }

    /// Derives this frame's click edge and rolls the previous-button state
    ///
    /// Must run exactly once per frame. Clicks inside an active guard window
    /// are swallowed but still advance the previous-button state, so a button
    /// held across the guard does not fire when the guard expires.
    pub fn finish_frame_sampling(&mut self, now: Instant) {
        let edge = self.mouse_down && !self.mouse_was_down;
        self.mouse_was_down = self.mouse_down;

        let guarded = match self.clicks_blocked_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.clicks_blocked_until = None;
                false
            }
            None => false,
        };

        self.clicked = edge && !guarded;
    }

    /// Ignores click edges until `duration` after `now`
    pub fn block_clicks(&mut self, now: Instant, duration: Duration) {
        self.clicks_blocked_until = Some(now + duration);
        self.clicked = false;
    }

    /// Any key bound to `key` is currently held down
    pub fn is_held(&self, key: Key) -> bool {
        key.scancodes().iter().any(|sc| self.held.contains(sc))
    }

    /// A key bound to `key` went down since the previous frame
    pub fn just_pressed(&self, key: Key) -> bool {
        key.scancodes()
            .iter()
            .any(|sc| self.pressed_this_frame.contains(sc))
    }

    /// Left mouse button went down this frame
    pub fn just_clicked(&self) -> bool {
        self.clicked
    }

    pub fn mouse_position(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }

    /// Clears per-frame key edges without touching held levels
    pub fn clear_key_edges(&mut self) {
        self.pressed_this_frame.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
