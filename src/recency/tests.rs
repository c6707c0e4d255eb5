use super::*;
use crate::library::{Registry, Track, TrackId};

#[test]
fn touch_puts_most_recent_first() {
    let mut w = RecencyWindow::new(SKIPPED_CAPACITY);
    w.touch(TrackId(1));
    w.touch(TrackId(2));
    w.touch(TrackId(3));
    assert_eq!(w.window(10), vec![TrackId(3), TrackId(2), TrackId(1)]);
    assert_eq!(w.front(), Some(TrackId(3)));
}

#[test]
fn retouch_moves_to_front_without_duplicating() {
    let mut w = RecencyWindow::new(SKIPPED_CAPACITY);
    w.touch(TrackId(1));
    w.touch(TrackId(2));
    w.touch(TrackId(1));
    assert_eq!(w.window(10), vec![TrackId(1), TrackId(2)]);
    assert_eq!(w.len(), 2);
}

#[test]
fn overflow_evicts_the_oldest() {
    let mut w = RecencyWindow::new(3);
    for n in 0..5 {
        w.touch(TrackId(n));
    }
    assert_eq!(w.len(), 3);
    assert_eq!(w.window(3), vec![TrackId(4), TrackId(3), TrackId(2)]);
    assert!(!w.contains(TrackId(0)));
    assert!(!w.contains(TrackId(1)));
}

#[test]
fn retouch_refreshes_an_entry_about_to_be_evicted() {
    let mut w = RecencyWindow::new(3);
    w.touch(TrackId(1));
    w.touch(TrackId(2));
    w.touch(TrackId(3));
    w.touch(TrackId(1));
    w.touch(TrackId(4));
    assert_eq!(w.window(3), vec![TrackId(4), TrackId(1), TrackId(3)]);
}

#[test]
fn window_respects_limit() {
    let mut w = RecencyWindow::new(ADDED_CAPACITY);
    for n in 0..6 {
        w.touch(TrackId(n));
    }
    assert_eq!(w.window(2), vec![TrackId(5), TrackId(4)]);
    assert!(w.window(0).is_empty());
    assert_eq!(w.window(100).len(), 6);
}

#[test]
fn clear_and_remove() {
    let mut w = RecencyWindow::new(SKIPPED_CAPACITY);
    w.touch(TrackId(1));
    w.touch(TrackId(2));
    assert!(w.remove(TrackId(1)));
    assert!(!w.remove(TrackId(1)));
    assert_eq!(w.window(10), vec![TrackId(2)]);
    w.clear();
    assert!(w.is_empty());
    assert_eq!(w.front(), None);
}

#[test]
fn zero_capacity_is_bumped_to_one() {
    let mut w = RecencyWindow::new(0);
    w.touch(TrackId(1));
    w.touch(TrackId(2));
    assert_eq!(w.capacity(), 1);
    assert_eq!(w.window(5), vec![TrackId(2)]);
}

#[test]
fn filter_by_genre_preserves_recency_and_stops_at_limit() {
    let mut reg = Registry::new();
    let a = reg.insert(Track::new("A", "x", "Jazz", 1));
    let b = reg.insert(Track::new("B", "x", "Rock", 1));
    let c = reg.insert(Track::new("C", "x", "Jazz", 1));
    let d = reg.insert(Track::new("D", "x", "Jazz", 1));

    let mut w = RecencyWindow::new(ADDED_CAPACITY);
    for id in [a, b, c, d] {
        w.touch(id);
    }

    assert_eq!(w.filter_by_genre(&reg, "Jazz", 5), vec![d, c, a]);
    assert_eq!(w.filter_by_genre(&reg, "Jazz", 2), vec![d, c]);
    assert_eq!(w.filter_by_genre(&reg, "Rock", 5), vec![b]);
    assert!(w.filter_by_genre(&reg, "jazz", 5).is_empty());
    assert!(w.filter_by_genre(&reg, "Jazz", 0).is_empty());
}

#[test]
fn filter_by_genre_skips_dead_handles() {
    let mut reg = Registry::new();
    let a = reg.insert(Track::new("A", "x", "Jazz", 1));
    let b = reg.insert(Track::new("B", "x", "Jazz", 1));
    let mut w = RecencyWindow::new(ADDED_CAPACITY);
    w.touch(a);
    w.touch(b);
    reg.remove(b);
    assert_eq!(w.filter_by_genre(&reg, "Jazz", 5), vec![a]);
}
