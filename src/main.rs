use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use retro_snake::config::{FRAME_INTERVAL_MS, THEMES, TICK_INTERVAL_MS, play_grid, theme_index_by_name};
use retro_snake::game::{GameState, TickEvents};
use retro_snake::input::{self, GameInput};
use retro_snake::renderer;
use retro_snake::score::{load_high_score, save_high_score};
use retro_snake::terminal_runtime::{self, TerminalSession};
use retro_snake::ui::hud::HudInfo;

/// Retro grid snake in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Color theme to start with (classic, ocean, neon).
    #[arg(long)]
    theme: Option<String>,

    /// Suppress the terminal bell on eat and collision events.
    #[arg(long = "no-bell")]
    no_bell: bool,

    /// Seed for the food placement sequence, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: could not read high score: {error}");
            0
        }
    };

    let theme_index = match cli.theme.as_deref() {
        Some(name) => theme_index_by_name(name).unwrap_or_else(|| {
            eprintln!(
                "warning: unknown theme {name:?}, using {:?}",
                THEMES[0].name
            );
            0
        }),
        None => 0,
    };

    terminal_runtime::install_panic_hook();
    run(&cli, theme_index, high_score)
}

fn run(cli: &Cli, mut theme_index: usize, mut high_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(play_grid(), seed),
        None => GameState::new(play_grid()),
    };
    let mut reference_high_score = high_score;
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        let theme = &THEMES[theme_index];
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                theme,
                &HudInfo {
                    high_score,
                    game_over_reference_high_score: reference_high_score,
                },
            )
        })?;

        if let Some(game_input) = input::poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::CycleTheme => theme_index = (theme_index + 1) % THEMES.len(),
                GameInput::Direction(direction) => state.apply_direction(direction),
            }
        }

        if last_tick.elapsed() >= tick_interval {
            let events = state.tick();
            last_tick = Instant::now();
            handle_tick_events(cli, events, &mut high_score, &mut reference_high_score);
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    Ok(())
}

fn handle_tick_events(
    cli: &Cli,
    events: TickEvents,
    high_score: &mut u32,
    reference_high_score: &mut u32,
) {
    if events.ate_food && !cli.no_bell {
        ring_bell();
    }

    let Some(round) = events.game_over else {
        return;
    };

    if !cli.no_bell {
        ring_bell();
    }

    *reference_high_score = *high_score;
    if round.score > *high_score {
        *high_score = round.score;
        if let Err(error) = save_high_score(*high_score) {
            eprintln!("failed to save high score: {error}");
        }
    }
}

fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
