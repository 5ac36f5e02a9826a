/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::{
    Balloon, BalloonColor, BalloonKind, GameState, GameStatus, InputEvent, Level, LossReason,
    BALLOON_WIDTH, BOMB_CHANCE, SCREEN_HEIGHT, SCREEN_WIDTH, START_BALLOONS,
};

/// Balloons that replace a popped or escaped bomb always come in at this
/// level's speed, whatever the round was started on.
pub const REPLACEMENT_LEVEL: Level = Level::Easy;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Spawn a balloon just below the bottom edge at a random column.
///
/// One in ten is a bomb, which rises one pixel per tick faster than `speed`.
pub fn spawn_balloon(speed: f32, rng: &mut impl Rng) -> Balloon {
    let max_x = (SCREEN_WIDTH - BALLOON_WIDTH) as i32;
    let x = rng.gen_range(0..=max_x) as f32;

    if rng.gen_bool(BOMB_CHANCE) {
        Balloon {
            x,
            y: SCREEN_HEIGHT,
            speed: speed + 1.0,
            kind: BalloonKind::Bomb,
        }
    } else {
        let color = *BalloonColor::ALL
            .choose(rng)
            .unwrap_or(&BalloonColor::Red);
        Balloon {
            x,
            y: SCREEN_HEIGHT,
            speed,
            kind: BalloonKind::Normal(color),
        }
    }
}

/// Build a fresh round: five new balloons at the level's speed, score zero.
pub fn start_game(level: Level, high_score: u32, rng: &mut impl Rng) -> GameState {
    let balloons = (0..START_BALLOONS)
        .map(|_| spawn_balloon(level.balloon_speed(), rng))
        .collect();

    log::info!("round started on {} ({} balloons)", level.name(), START_BALLOONS);

    GameState {
        balloons,
        score: 0,
        high_score,
        level,
        status: GameStatus::Playing,
    }
}

// ── Input phase ──────────────────────────────────────────────────────────────

/// Resolve one pointer press at logical `(x, y)`.
///
/// Every balloon under the pointer is hit, in collection order.  A normal
/// balloon is popped, scored and replaced; hitting a bomb ends the round and
/// stops any further hits, so a normal balloon after the bomb in collection
/// order is neither popped nor scored.  Replacements are never hit by the
/// press that spawned them.
pub fn apply_press(state: &GameState, x: f32, y: f32, rng: &mut impl Rng) -> GameState {
    if !state.is_active() {
        return state.clone();
    }

    let mut popped: Vec<usize> = Vec::new();
    let mut status = state.status;

    for (i, balloon) in state.balloons.iter().enumerate() {
        if !balloon.rect().contains(x, y) {
            continue;
        }
        if balloon.is_bomb() {
            log::info!("bomb popped at ({x:.0}, {y:.0})");
            status = GameStatus::GameOver(LossReason::BombPopped);
            break;
        }
        popped.push(i);
    }

    let mut balloons: Vec<Balloon> = state
        .balloons
        .iter()
        .enumerate()
        .filter(|(i, _)| !popped.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    for _ in &popped {
        balloons.push(spawn_balloon(REPLACEMENT_LEVEL.balloon_speed(), rng));
    }

    let score = state.score + popped.len() as u32;
    if !popped.is_empty() {
        log::debug!("popped {} balloon(s), score {}", popped.len(), score);
    }

    GameState {
        balloons,
        score,
        high_score: state.high_score.max(score),
        status,
        ..state.clone()
    }
}

// ── Motion phase ─────────────────────────────────────────────────────────────

/// Raise every balloon by its speed, then settle the ones that left the top.
///
/// An escaped bomb is harmless and gets replaced.  An escaped normal balloon
/// ends the round; the collection is left as it is.
pub fn advance_balloons(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_active() {
        return state.clone();
    }

    let moved: Vec<Balloon> = state
        .balloons
        .iter()
        .map(|b| Balloon {
            y: b.y - b.speed,
            ..b.clone()
        })
        .collect();

    let normal_escaped = moved.iter().any(|b| b.escaped() && !b.is_bomb());
    let bombs_escaped = moved.iter().filter(|b| b.escaped() && b.is_bomb()).count();

    let mut balloons: Vec<Balloon> = moved
        .into_iter()
        .filter(|b| !(b.escaped() && b.is_bomb()))
        .collect();

    for _ in 0..bombs_escaped {
        log::debug!("bomb escaped, replacing");
        balloons.push(spawn_balloon(REPLACEMENT_LEVEL.balloon_speed(), rng));
    }

    let status = if normal_escaped {
        log::info!("balloon escaped, round over with score {}", state.score);
        GameStatus::GameOver(LossReason::BalloonEscaped)
    } else {
        state.status
    };

    GameState {
        balloons,
        status,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the round by one frame.
///
/// All presses are resolved first, each against the collection as the
/// previous press left it; then balloons move.  `Quit` is not handled here:
/// the caller unwinds on it before ticking.  A round that ends during the
/// input phase is not moved.
pub fn tick(state: &GameState, events: &[InputEvent], rng: &mut impl Rng) -> GameState {
    if !state.is_active() {
        return state.clone();
    }

    let mut next = state.clone();

    for event in events {
        if let InputEvent::PointerDown { x, y } = *event {
            next = apply_press(&next, x, y, rng);
        }
    }

    advance_balloons(&next, rng)
}
