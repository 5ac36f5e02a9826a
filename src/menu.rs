/// Difficulty menu layout and click mapping.
///
/// The menu is a column of labels on the logical canvas.  Each selectable
/// label owns a 100-pixel vertical band centred on it; a press anywhere in
/// that band (at any x) selects it.

use crate::entities::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Level),
    Exit,
}

/// A label drawn on the menu screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    /// Logical y of the label's centre.
    pub y: f32,
    /// `None` for the title.
    pub choice: Option<MenuChoice>,
}

pub const TITLE: MenuItem = MenuItem {
    label: "Choose Difficulty",
    y: 50.0,
    choice: None,
};

pub const ITEMS: [MenuItem; 4] = [
    MenuItem {
        label: "Easy - Level 1",
        y: 200.0,
        choice: Some(MenuChoice::Play(Level::Easy)),
    },
    MenuItem {
        label: "Medium - Level 2",
        y: 300.0,
        choice: Some(MenuChoice::Play(Level::Medium)),
    },
    MenuItem {
        label: "Hard - Level 3",
        y: 400.0,
        choice: Some(MenuChoice::Play(Level::Hard)),
    },
    MenuItem {
        label: "Exit",
        y: 500.0,
        choice: Some(MenuChoice::Exit),
    },
];

/// Half the height of a selectable band.
pub const BAND_HALF_HEIGHT: f32 = 50.0;

/// Map a press at logical `y` to a menu choice.
///
/// Bands are inclusive at both ends; where two touch, the upper one wins.
pub fn choice_at(y: f32) -> Option<MenuChoice> {
    ITEMS
        .iter()
        .find(|item| (item.y - BAND_HALF_HEIGHT..=item.y + BAND_HALF_HEIGHT).contains(&y))
        .and_then(|item| item.choice)
}
