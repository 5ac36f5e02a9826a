/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use balloon_pop::entities::{
    Balloon, BalloonColor, BalloonKind, GameState, GameStatus, Level, LossReason,
};
use balloon_pop::menu::{self, MenuItem};
use balloon_pop::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_HUD_SCORE: Color = Color::White;
const C_HUD_BEST: Color = Color::Yellow;
const C_BOMB: Color = Color::Rgb { r: 169, g: 169, b: 169 };
const C_MENU: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

fn balloon_color(kind: BalloonKind) -> Color {
    match kind {
        BalloonKind::Normal(BalloonColor::Red) => Color::Red,
        BalloonKind::Normal(BalloonColor::Green) => Color::Green,
        BalloonKind::Normal(BalloonColor::Blue) => Color::Blue,
        BalloonKind::Bomb => C_BOMB,
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Easy => Color::Green,
        Level::Medium => Color::Yellow,
        Level::Hard => Color::Red,
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete game frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sky(out, view)?;
    for balloon in &state.balloons {
        draw_balloon(out, balloon, view)?;
    }
    draw_hud(out, state, view)?;
    draw_hint(out, view, "Click balloons to pop them   Q : Quit")?;

    if let GameStatus::GameOver(reason) = state.status {
        draw_game_over(out, state, reason, view)?;
    }

    finish(out, view)
}

/// Render the difficulty menu.
pub fn render_menu<W: Write>(out: &mut W, view: Viewport, high_score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_label(out, &menu::TITLE, view, Color::Cyan)?;
    for item in &menu::ITEMS {
        draw_label(out, item, view, C_MENU)?;
    }

    if high_score > 0 {
        let best = format!("Best Score: {}", high_score);
        centered(out, view, 0, &best, C_HUD_BEST)?;
    }

    draw_hint(out, view, "Click a difficulty   Q : Quit")?;
    finish(out, view)
}

// ── Pieces ────────────────────────────────────────────────────────────────────

fn finish<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_sky<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let blank = " ".repeat(view.cols as usize);
    out.queue(style::SetBackgroundColor(C_SKY))?;
    for row in 0..view.play_rows() {
        out.queue(cursor::MoveTo(0, balloon_pop::viewport::PLAY_TOP + row))?;
        out.queue(Print(&blank))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_balloon<W: Write>(out: &mut W, balloon: &Balloon, view: Viewport) -> std::io::Result<()> {
    let Some(span) = view.span(&balloon.rect()) else {
        return Ok(());
    };

    let width = (span.col1 - span.col0) as usize;
    let fill = "█".repeat(width);
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(style::SetForegroundColor(balloon_color(balloon.kind)))?;
    for row in span.row0..span.row1 {
        out.queue(cursor::MoveTo(span.col0, row))?;
        out.queue(Print(&fill))?;
    }

    // Bombs get a marker in the middle so they read without colour
    if balloon.is_bomb() {
        let mid_row = span.row0 + (span.row1 - span.row0) / 2;
        let mid_col = span.col0 + (span.col1 - span.col0) / 2;
        out.queue(cursor::MoveTo(mid_col, mid_row))?;
        out.queue(style::SetBackgroundColor(C_BOMB))?;
        out.queue(style::SetForegroundColor(Color::Black))?;
        out.queue(Print("✱"))?;
    }

    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    // Level — centre
    let level_str = format!("[ {} ]", state.level.name().to_uppercase());
    let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(level_color(state.level)))?;
    out.queue(Print(&level_str))?;

    // Best — right
    let best = format!("Best: {}", state.high_score);
    let bx = view.cols.saturating_sub(best.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(bx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best))?;

    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, view: Viewport, hint: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

fn draw_label<W: Write>(
    out: &mut W,
    item: &MenuItem,
    view: Viewport,
    color: Color,
) -> std::io::Result<()> {
    let (_, row) = view.to_cell(0.0, item.y);
    centered(out, view, row.max(0) as u16, item.label, color)
}

fn centered<W: Write>(
    out: &mut W,
    view: Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    reason: LossReason,
    view: Viewport,
) -> std::io::Result<()> {
    let cause = match reason {
        LossReason::BombPopped => "You popped a bomb!",
        LossReason::BalloonEscaped => "A balloon got away!",
    };
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (cause, Color::White),
        (&score_line, Color::Yellow),
        ("Click to return to the menu   Q - Quit", Color::White),
    ];

    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetBackgroundColor(Color::Black))?;
    for (i, (msg, color)) in lines.iter().enumerate() {
        centered(out, view, start_row + i as u16, msg, *color)?;
    }
    out.queue(style::ResetColor)?;

    Ok(())
}
