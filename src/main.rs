//! Terminal blockfall runner (default binary).
//!
//! The driver loop: pump key events into actions, feed real elapsed time to
//! the core once per frame, and flush a rendered snapshot to the terminal.
//! High scores persist to a JSON dotfile in the home directory.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{GameEvent, GameState};
use tui_blockfall::input::{action_for_key, should_quit, InputHandler};
use tui_blockfall::store::FileStore;
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::GameAction;

const FRAME_MS: u64 = 16;
const BANNER_TTL_MS: u32 = 1500;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn scores_path() -> PathBuf {
    let mut base = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    base.push(".tui-blockfall.json");
    base
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileStore::open(scores_path());
    let mut game = GameState::with_store(time_seed(), Box::new(store));
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut input = InputHandler::new();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();
    let mut banner: Option<(String, u32)> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let text = banner.as_ref().map(|(msg, _)| msg.as_str());
        view.render_into(&game.snapshot(), text, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        } else if let Some(action) = action_for_key(key) {
                            // Movement keys belong to the DAS handler; route
                            // everything else directly.
                            if !matches!(
                                action,
                                GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
                            ) {
                                game.apply_action(action);
                            }
                        }
                    }
                    // Terminal auto-repeat is replaced by DAS/ARR.
                    KeyEventKind::Repeat => {}
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with real elapsed time; the core caps each slice itself.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let delta_ms = elapsed.as_millis().min(u128::from(u32::MAX)) as u32;

            for action in input.update(delta_ms) {
                game.apply_action(action);
            }
            game.update(delta_ms);

            if let Some((_, ttl)) = &mut banner {
                *ttl = ttl.saturating_sub(delta_ms);
                if *ttl == 0 {
                    banner = None;
                }
            }
            for event in game.take_events() {
                if let Some(msg) = banner_for(&event) {
                    banner = Some((msg, BANNER_TTL_MS));
                }
            }
        }
    }
}

fn banner_for(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::LinesCleared { count, .. } => Some(match count {
            1 => "SINGLE".to_owned(),
            2 => "DOUBLE".to_owned(),
            3 => "TRIPLE".to_owned(),
            _ => "TETRIS!".to_owned(),
        }),
        GameEvent::LevelUp { level } => Some(format!("LEVEL {}", level)),
        GameEvent::GameOver { score } => Some(format!("FINAL SCORE {}", score)),
        GameEvent::PieceLocked { .. } => None,
    }
}
