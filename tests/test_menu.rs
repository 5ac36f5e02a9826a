use balloon_pop::entities::Level;
use balloon_pop::menu::*;

#[test]
fn band_centres_select_their_item() {
    assert_eq!(choice_at(200.0), Some(MenuChoice::Play(Level::Easy)));
    assert_eq!(choice_at(300.0), Some(MenuChoice::Play(Level::Medium)));
    assert_eq!(choice_at(400.0), Some(MenuChoice::Play(Level::Hard)));
    assert_eq!(choice_at(500.0), Some(MenuChoice::Exit));
}

#[test]
fn band_edges_are_inclusive() {
    assert_eq!(choice_at(150.0), Some(MenuChoice::Play(Level::Easy)));
    assert_eq!(choice_at(550.0), Some(MenuChoice::Exit));
}

#[test]
fn shared_edges_go_to_the_upper_band() {
    assert_eq!(choice_at(250.0), Some(MenuChoice::Play(Level::Easy)));
    assert_eq!(choice_at(350.0), Some(MenuChoice::Play(Level::Medium)));
    assert_eq!(choice_at(450.0), Some(MenuChoice::Play(Level::Hard)));
}

#[test]
fn outside_every_band_is_ignored() {
    assert_eq!(choice_at(0.0), None);
    assert_eq!(choice_at(50.0), None); // title
    assert_eq!(choice_at(149.9), None);
    assert_eq!(choice_at(550.1), None);
    assert_eq!(choice_at(599.0), None);
}

#[test]
fn title_is_not_selectable() {
    assert_eq!(TITLE.choice, None);
    assert!(ITEMS.iter().all(|item| item.choice.is_some()));
}
