mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use balloon_pop::compute::{start_game, tick};
use balloon_pop::config::Config;
use balloon_pop::entities::{GameState, InputEvent};
use balloon_pop::menu::{choice_at, MenuChoice};
use balloon_pop::viewport::Viewport;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Reduce a terminal event to the two kinds the game understands.
fn translate(ev: &Event, view: Viewport) -> Option<InputEvent> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => view
            .to_logical(*column, *row)
            .map(|(x, y)| InputEvent::PointerDown { x, y }),
        _ => None,
    }
}

/// Drain every pending event without blocking.  A dead input thread counts
/// as a quit.
fn drain(rx: &mpsc::Receiver<Event>, view: Viewport) -> Vec<InputEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(ev) => events.extend(translate(&ev, view)),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                events.push(InputEvent::Quit);
                break;
            }
        }
    }
    events
}

fn current_viewport() -> std::io::Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    Ok(Viewport::new(cols, rows))
}

fn pace(frame_start: Instant, config: &Config) {
    let elapsed = frame_start.elapsed();
    let frame = config.frame_duration();
    if elapsed < frame {
        thread::sleep(frame - elapsed);
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Poll until a difficulty is clicked, Exit is clicked, or the player quits.
fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    high_score: u32,
) -> std::io::Result<MenuChoice> {
    loop {
        let frame_start = Instant::now();
        let view = current_viewport()?;

        for event in drain(rx, view) {
            match event {
                InputEvent::Quit => return Ok(MenuChoice::Exit),
                InputEvent::PointerDown { y, .. } => {
                    if let Some(choice) = choice_at(y) {
                        return Ok(choice);
                    }
                }
            }
        }

        display::render_menu(out, view, high_score)?;
        pace(frame_start, config);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// While the round is live every frame's presses go to `tick`.  Once it is
/// over the final frame stays up until the next press.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    rng: &mut StdRng,
) -> std::io::Result<bool> {
    loop {
        let frame_start = Instant::now();
        let view = current_viewport()?;
        let events = drain(rx, view);

        if events.contains(&InputEvent::Quit) {
            return Ok(true);
        }

        if state.is_active() {
            *state = tick(state, &events, rng);
        } else if !events.is_empty() {
            return Ok(false);
        }

        display::render(out, state, view)?;
        pace(frame_start, config);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(EnableMouseCapture)
        .context("enabling mouse capture")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so neither loop ever blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let mut high_score = 0;

    loop {
        match show_menu(out, rx, config, high_score)? {
            MenuChoice::Exit => break,
            MenuChoice::Play(level) => {
                let mut state = start_game(level, high_score, rng);
                let quit = game_loop(out, &mut state, rx, config, rng)?;
                high_score = state.high_score;
                log::info!("round over: score {}, best {}", state.score, high_score);

                if quit {
                    break;
                }
            }
        }
    }
    log::info!("exiting");
    Ok(())
}
