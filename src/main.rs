//! Terminal runner (default binary).
//!
//! Plays on the keyboard by default; `--bot` hands control to the heuristic
//! autopilot. An optional numeric argument seeds the piece sequence for
//! reproducible games.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_bot::bot::execute_move;
use tetris_bot::core::GameState;
use tetris_bot::input::{map_key, should_quit};
use tetris_bot::term::{GameView, TerminalRenderer, Viewport};
use tetris_bot::types::{BOT_MOVE_MS, TICK_MS};

struct Options {
    bot: bool,
    seed: u32,
}

fn parse_args() -> Options {
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut opts = Options {
        bot: false,
        seed: clock_seed,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--bot" => opts.bot = true,
            other => {
                if let Ok(seed) = other.parse() {
                    opts.seed = seed;
                }
            }
        }
    }
    opts
}

fn main() -> Result<()> {
    let opts = parse_args();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: &Options) -> Result<()> {
    let mut game_state = GameState::new(opts.seed);
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut bot_timer_ms: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if !opts.bot {
                        if let Some(action) = map_key(key) {
                            game_state.apply_action(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if opts.bot && !game_state.game_over() {
                // One full placement per bot interval keeps moves watchable.
                bot_timer_ms += TICK_MS;
                if bot_timer_ms >= BOT_MOVE_MS {
                    bot_timer_ms = 0;
                    execute_move(&mut game_state);
                }
            }

            game_state.tick(TICK_MS);
        }
    }
}
