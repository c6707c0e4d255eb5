use super::*;
use crate::history::{PlayCounts, PlaybackHistory};
use crate::library::{Registry, Track, TrackId};
use crate::recency::{RecencyWindow, SKIPPED_CAPACITY};

struct Fixture {
    reg: Registry,
    ids: Vec<TrackId>,
    counts: PlayCounts,
    skipped: RecencyWindow,
}

fn fixture(tracks: &[(&str, &str, u32)]) -> Fixture {
    let mut reg = Registry::new();
    let mut counts = PlayCounts::new();
    let ids = tracks
        .iter()
        .map(|(title, genre, plays)| {
            counts.set(title, *plays);
            reg.insert(Track::new(*title, "Artist", *genre, 180))
        })
        .collect();
    Fixture {
        reg,
        ids,
        counts,
        skipped: RecencyWindow::new(SKIPPED_CAPACITY),
    }
}

impl Fixture {
    fn top(&self, k: usize) -> Vec<TrackId> {
        ReplaySelector::default().top_calming(&self.ids, &self.reg, &self.counts, &self.skipped, k)
    }
}

#[test]
fn is_calming_ignores_case_and_knows_synonyms() {
    let s = ReplaySelector::default();
    assert!(s.is_calming("Lo-Fi"));
    assert!(s.is_calming("lo-fi"));
    assert!(s.is_calming("LOFI"));
    assert!(s.is_calming("jazz"));
    assert!(s.is_calming(" Ambient "));
    assert!(!s.is_calming("Rock"));
    assert!(!s.is_calming(""));
}

#[test]
fn custom_genre_set_replaces_defaults() {
    let s = ReplaySelector::new(["Drone", "  "]);
    assert!(s.is_calming("drone"));
    assert!(!s.is_calming("Jazz"));
    assert_eq!(s.genres().len(), 1);
}

#[test]
fn only_calming_candidate_wins_regardless_of_play_count() {
    let f = fixture(&[("Rain", "Lo-Fi", 3), ("Noise", "Rock", 5)]);
    assert_eq!(f.top(3), vec![f.ids[0]]);
}

#[test]
fn ranks_by_play_count_descending_and_caps_at_k() {
    let f = fixture(&[
        ("A", "Jazz", 1),
        ("B", "Chill", 9),
        ("C", "Ambient", 4),
        ("D", "Classical", 7),
    ]);
    assert_eq!(f.top(3), vec![f.ids[1], f.ids[3], f.ids[2]]);
    assert_eq!(f.top(1), vec![f.ids[1]]);
    assert!(f.top(0).is_empty());
}

#[test]
fn ties_keep_catalog_order() {
    let f = fixture(&[("A", "Jazz", 2), ("B", "Jazz", 2), ("C", "Jazz", 2)]);
    assert_eq!(f.top(3), vec![f.ids[0], f.ids[1], f.ids[2]]);
}

#[test]
fn skipped_tracks_are_excluded() {
    let mut f = fixture(&[("A", "Jazz", 9), ("B", "Jazz", 1)]);
    f.skipped.touch(f.ids[0]);
    assert_eq!(f.top(3), vec![f.ids[1]]);

    f.skipped.touch(f.ids[1]);
    assert!(f.top(3).is_empty());
}

#[test]
fn apply_replay_records_history_and_counts() {
    let mut f = fixture(&[("A", "Jazz", 1), ("B", "Jazz", 0)]);
    let mut history = PlaybackHistory::new();
    let selected = f.top(3);

    let played = apply_replay(&selected, &f.reg, &mut history, &mut f.counts);
    assert_eq!(played, 2);
    assert_eq!(f.counts.get("A"), 2);
    assert_eq!(f.counts.get("B"), 1);
    assert_eq!(history.recently_played(5), vec![f.ids[1], f.ids[0]]);
}

#[test]
fn apply_replay_with_nothing_selected_is_a_noop() {
    let mut f = fixture(&[("A", "Jazz", 1)]);
    let mut history = PlaybackHistory::new();
    assert_eq!(apply_replay(&[], &f.reg, &mut history, &mut f.counts), 0);
    assert!(history.is_empty());
    assert_eq!(f.counts.get("A"), 1);
}
