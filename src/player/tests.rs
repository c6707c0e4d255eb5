use super::*;

#[test]
fn starts_stopped_and_next_begins_at_zero() {
    let mut p = Player::new();
    assert_eq!(p.state(), PlaybackState::Stopped);
    assert_eq!(p.play_next(3), Step::Played(0));
    assert_eq!(p.state(), PlaybackState::Playing(0));
}

#[test]
fn next_runs_off_the_end_into_stopped() {
    let mut p = Player::new();
    assert_eq!(p.play_next(2), Step::Played(0));
    assert_eq!(p.play_next(2), Step::Played(1));
    assert_eq!(p.play_next(2), Step::EndReached);
    assert_eq!(p.state(), PlaybackState::Stopped);
    // A fresh next starts over.
    assert_eq!(p.play_next(2), Step::Played(0));
}

#[test]
fn previous_is_a_noop_at_start() {
    let mut p = Player::new();
    assert_eq!(p.play_previous(3), Step::AtStart);
    p.play_next(3);
    assert_eq!(p.play_previous(3), Step::AtStart);
    assert_eq!(p.state(), PlaybackState::Playing(0));

    p.play_next(3);
    p.play_next(3);
    assert_eq!(p.play_previous(3), Step::Played(1));
}

#[test]
fn empty_catalog_reports_empty() {
    let mut p = Player::new();
    assert_eq!(p.play_next(0), Step::Empty);
    assert_eq!(p.play_previous(0), Step::Empty);
    assert!(p.play_all(0).is_empty());
}

#[test]
fn play_all_visits_every_index_and_stops() {
    let mut p = Player::new();
    p.play_next(4);
    assert_eq!(p.play_all(4), vec![0, 1, 2, 3]);
    assert_eq!(p.current_index(), None);
}

#[test]
fn on_removed_tracks_the_playing_entry() {
    let mut p = Player::new();
    p.play_next(5);
    p.play_next(5);
    p.play_next(5);
    assert_eq!(p.current_index(), Some(2));

    p.on_removed(4);
    assert_eq!(p.current_index(), Some(2));
    p.on_removed(0);
    assert_eq!(p.current_index(), Some(1));
    p.on_removed(1);
    assert_eq!(p.state(), PlaybackState::Stopped);
}

#[test]
fn seek_only_moves_a_playing_player() {
    let mut p = Player::new();
    p.seek(3);
    assert_eq!(p.state(), PlaybackState::Stopped);

    p.play_next(5);
    p.seek(3);
    assert_eq!(p.current_index(), Some(3));
    p.stop();
    assert_eq!(p.current_index(), None);
}
