//! DAS/ARR repeat handling for held movement keys.
//!
//! Terminals differ in what they report for held keys: some deliver proper
//! press/release pairs, others only a stream of repeated presses. The handler
//! treats a repeated press of the held key as a keep-alive and drops the held
//! state after a short timeout without one, so both kinds of terminal behave
//! the same.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{GameAction, ARR_DELAY_MS, DAS_DELAY_MS};

/// Held state expires after this long without a press event.
const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    fn action(self) -> GameAction {
        match self {
            Horizontal::Left => GameAction::MoveLeft,
            Horizontal::Right => GameAction::MoveRight,
        }
    }
}

/// Turns held keys into repeated actions after the DAS delay, at the ARR rate.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Option<Horizontal>,
    horizontal_held_ms: u32,
    horizontal_repeat_ms: u32,
    down_held: bool,
    down_held_ms: u32,
    down_repeat_ms: u32,
    idle_ms: u32,
    das_delay_ms: u32,
    arr_delay_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_timing(DAS_DELAY_MS, ARR_DELAY_MS)
    }

    pub fn with_timing(das_delay_ms: u32, arr_delay_ms: u32) -> Self {
        Self {
            horizontal: None,
            horizontal_held_ms: 0,
            horizontal_repeat_ms: 0,
            down_held: false,
            down_held_ms: 0,
            down_repeat_ms: 0,
            idle_ms: 0,
            das_delay_ms,
            arr_delay_ms: arr_delay_ms.max(1),
        }
    }

    /// Register a key press. Returns the immediate action for a fresh press;
    /// a repeat of the already-held key only refreshes the keep-alive.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let direction = match code {
            KeyCode::Left | KeyCode::Char('h' | 'H') | KeyCode::Char('a' | 'A') => {
                Some(Horizontal::Left)
            }
            KeyCode::Right | KeyCode::Char('l' | 'L') | KeyCode::Char('d' | 'D') => {
                Some(Horizontal::Right)
            }
            _ => None,
        };

        if let Some(direction) = direction {
            self.idle_ms = 0;
            if self.horizontal == Some(direction) {
                return None;
            }
            self.horizontal = Some(direction);
            self.horizontal_held_ms = 0;
            self.horizontal_repeat_ms = 0;
            return Some(direction.action());
        }

        if matches!(
            code,
            KeyCode::Down | KeyCode::Char('j' | 'J') | KeyCode::Char('s' | 'S')
        ) {
            self.idle_ms = 0;
            if self.down_held {
                return None;
            }
            self.down_held = true;
            self.down_held_ms = 0;
            self.down_repeat_ms = 0;
            return Some(GameAction::SoftDrop);
        }

        None
    }

    /// Register a key release (for terminals that report them).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h' | 'H') | KeyCode::Char('a' | 'A') => {
                if self.horizontal == Some(Horizontal::Left) {
                    self.clear_horizontal();
                }
            }
            KeyCode::Right | KeyCode::Char('l' | 'L') | KeyCode::Char('d' | 'D') => {
                if self.horizontal == Some(Horizontal::Right) {
                    self.clear_horizontal();
                }
            }
            KeyCode::Down | KeyCode::Char('j' | 'J') | KeyCode::Char('s' | 'S') => {
                self.down_held = false;
                self.down_held_ms = 0;
                self.down_repeat_ms = 0;
            }
            _ => {}
        }
    }

    fn clear_horizontal(&mut self) {
        self.horizontal = None;
        self.horizontal_held_ms = 0;
        self.horizontal_repeat_ms = 0;
    }

    fn release_all(&mut self) {
        self.clear_horizontal();
        self.down_held = false;
        self.down_held_ms = 0;
        self.down_repeat_ms = 0;
    }

    /// Advance timers and collect the repeat actions due this frame.
    pub fn update(&mut self, delta_ms: u32) -> ArrayVec<GameAction, 8> {
        let mut actions = ArrayVec::new();

        self.idle_ms += delta_ms;
        if self.idle_ms >= KEY_RELEASE_TIMEOUT_MS {
            self.release_all();
            return actions;
        }

        if let Some(direction) = self.horizontal {
            self.horizontal_held_ms += delta_ms;
            if self.horizontal_held_ms >= self.das_delay_ms {
                // Only the time past the DAS boundary feeds the repeat rate.
                let surplus = (self.horizontal_held_ms - self.das_delay_ms).min(delta_ms);
                self.horizontal_repeat_ms += surplus;
                while self.horizontal_repeat_ms >= self.arr_delay_ms {
                    self.horizontal_repeat_ms -= self.arr_delay_ms;
                    if actions.try_push(direction.action()).is_err() {
                        break;
                    }
                }
            }
        }

        if self.down_held {
            self.down_held_ms += delta_ms;
            if self.down_held_ms >= self.das_delay_ms {
                let surplus = (self.down_held_ms - self.das_delay_ms).min(delta_ms);
                self.down_repeat_ms += surplus;
                while self.down_repeat_ms >= self.arr_delay_ms {
                    self.down_repeat_ms -= self.arr_delay_ms;
                    if actions.try_push(GameAction::SoftDrop).is_err() {
                        break;
                    }
                }
            }
        }

        actions
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
