/// All game entity types — pure data, no logic.

// ── Canvas & balloon geometry ─────────────────────────────────────────────────

/// Logical canvas size.  The terminal is scaled onto this.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const BALLOON_WIDTH: f32 = 50.0;
pub const BALLOON_HEIGHT: f32 = 70.0;

/// Balloons alive at the start of every round.
pub const START_BALLOONS: usize = 5;

/// Chance that a freshly spawned balloon is a bomb.
pub const BOMB_CHANCE: f64 = 0.1;

pub const DEFAULT_FPS: u32 = 30;

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }

    /// Rise speed (logical pixels per tick) of balloons spawned for this level.
    pub fn balloon_speed(&self) -> f32 {
        match self {
            Level::Easy => 2.0,
            Level::Medium => 4.0,
            Level::Hard => 6.0,
        }
    }
}

// ── Balloons ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonColor {
    Red,
    Green,
    Blue,
}

impl BalloonColor {
    pub const ALL: [BalloonColor; 3] = [BalloonColor::Red, BalloonColor::Green, BalloonColor::Blue];
}

/// A balloon is either a normal target or a bomb.  Bombs always share one
/// hazard colour, so they carry no colour of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonKind {
    Normal(BalloonColor),
    Bomb,
}

/// Axis-aligned rectangle in logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    /// Left edge.
    pub x: f32,
    /// Top edge.  Decreases as the balloon rises.
    pub y: f32,
    /// Logical pixels risen per tick.
    pub speed: f32,
    pub kind: BalloonKind,
}

impl Balloon {
    pub fn is_bomb(&self) -> bool {
        self.kind == BalloonKind::Bomb
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: BALLOON_WIDTH,
            h: BALLOON_HEIGHT,
        }
    }

    /// True once the balloon has fully left through the top of the canvas.
    pub fn escaped(&self) -> bool {
        self.y < -BALLOON_HEIGHT
    }
}

// ── Round status ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    /// The player popped a bomb.
    BombPopped,
    /// A normal balloon floated off the top.
    BalloonEscaped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(LossReason),
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// The only events the game logic consumes.  Positions are logical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: f32, y: f32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one round.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Live balloons.  Order carries no meaning.
    pub balloons: Vec<Balloon>,
    pub score: u32,
    /// Best score of this session, updated live during play.
    pub high_score: u32,
    pub level: Level,
    pub status: GameStatus,
}

impl GameState {
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
