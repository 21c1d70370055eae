use raylib::prelude::*;
use std::time::Duration;

use hrm_showcase::clock::{Clock, ManualClock, SystemClock};

/// Time source shared by every page.
///
/// `Stepped` advances by a fixed frame time (reproducible runs), `Wall`
/// follows the real clock.
#[derive(Debug, Clone)]
pub enum AppClock {
    Stepped(ManualClock),
    Wall(SystemClock),
}

impl AppClock {
    pub fn step(&self, dt: f32) {
        if let AppClock::Stepped(clock) = self {
            clock.advance(Duration::from_secs_f32(dt));
        }
    }
}

impl Clock for AppClock {
    fn now(&self) -> Duration {
        match self {
            AppClock::Stepped(clock) => clock.now(),
            AppClock::Wall(clock) => clock.now(),
        }
    }
}

/// Input gathered once per frame, before drawing starts.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub mouse: Vector2,
    pub clicked: bool,
    pub keys: Vec<KeyboardKey>,
    pub chars: Vec<char>,
}

impl FrameInput {
    const WATCHED_KEYS: [KeyboardKey; 10] = [
        KeyboardKey::KEY_RIGHT,
        KeyboardKey::KEY_LEFT,
        KeyboardKey::KEY_ESCAPE,
        KeyboardKey::KEY_TAB,
        KeyboardKey::KEY_ENTER,
        KeyboardKey::KEY_BACKSPACE,
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
    ];

    pub fn capture(rl: &mut RaylibHandle) -> Self {
        let keys = Self::WATCHED_KEYS.into_iter().filter(|key| rl.is_key_pressed(*key)).collect();
        let mut chars = Vec::new();
        while let Some(c) = rl.get_char_pressed() {
            chars.push(c);
        }
        Self {
            mouse: rl.get_mouse_position(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            keys,
            chars,
        }
    }

    pub fn pressed(&self, key: KeyboardKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn hovering(&self, area: Rectangle) -> bool {
        area.check_collision_point_rec(self.mouse)
    }

    pub fn clicked_in(&self, area: Rectangle) -> bool {
        self.clicked && self.hovering(area)
    }
}

/// Requests a page makes of the window or the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CopyToClipboard(String),
    OpenUri(String),
    Notify(String),
}

pub trait Page {
    fn title(&self) -> &'static str;

    /// A page that takes keyboard text keeps digit keys from switching pages.
    fn captures_text(&self) -> bool {
        false
    }

    fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<Effect>;
    fn draw(&self, d: &mut RaylibDrawHandle);
}
