use super::*;
use crate::config::Settings;
use crate::error::Error;
use crate::library::Track;
use crate::ratings::Rating;
use tempfile::tempdir;

fn rating(n: u8) -> Rating {
    Rating::new(n).unwrap()
}

fn titles_of(session: &Session) -> Vec<String> {
    session
        .tracks()
        .into_iter()
        .map(|(_, t)| t.title.clone())
        .collect()
}

fn sample() -> Session {
    let mut s = Session::default();
    s.add_track(Track::new("A", "Artist1", "Jazz", 100)).unwrap();
    s.add_track(Track::new("B", "Artist2", "Rock", 200)).unwrap();
    s.rate("A", rating(5)).unwrap();
    s.rate("B", rating(3)).unwrap();
    s.play_title("A").unwrap();
    s.play_title("B").unwrap();
    s.skip("B").unwrap();
    s
}

#[test]
fn encode_writes_sections_in_order() {
    let text = encode(&sample());
    let expected = "\
[SONGS]
A,Artist1,Jazz,100
B,Artist2,Rock,200
[PLAY_COUNTS]
A,1
B,1
[RATINGS]
B,3
A,5
[HISTORY]
A
B
[SKIPPED]
B
[RECENT_ADDED]
B
A
[END]
";
    assert_eq!(text, expected);
}

#[test]
fn save_then_load_restores_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("setlist_data.txt");
    let settings = Settings::default();

    sample().save(&path).unwrap();
    let loaded = Session::load(&path, &settings).unwrap();

    assert_eq!(titles_of(&loaded), vec!["A", "B"]);
    let (_, a) = loaded.lookup("A").unwrap();
    assert_eq!((a.artist.as_str(), a.genre.as_str(), a.duration), ("Artist1", "Jazz", 100));

    let five: Vec<&str> = loaded
        .tracks_with_rating(rating(5))
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(five, vec!["A"]);
    assert_eq!(loaded.tracks_with_rating(rating(3)).len(), 1);

    let recent: Vec<&str> = loaded
        .recently_played(5)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(recent, vec!["B", "A"]);

    let skipped: Vec<&str> = loaded.skipped().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(skipped, vec!["B"]);
    assert_eq!(loaded.play_counts().get("A"), 1);
    assert_eq!(loaded.last_added().map(|t| t.title.as_str()), Some("B"));

    // a second encode is byte-identical
    assert_eq!(encode(&loaded), encode(&sample()));
}

#[test]
fn missing_file_gives_fresh_session() {
    let dir = tempdir().unwrap();
    let session = load(&dir.path().join("absent.txt"), &Settings::default()).unwrap();
    assert!(session.is_empty());
}

#[test]
fn save_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    sample().save(&path).unwrap();

    let mut smaller = Session::default();
    smaller.add_track(Track::new("Only", "X", "Pop", 1)).unwrap();
    smaller.save(&path).unwrap();

    let loaded = load(&path, &Settings::default()).unwrap();
    assert_eq!(titles_of(&loaded), vec!["Only"]);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn titles_with_commas_survive() {
    let mut s = Session::default();
    s.add_track(Track::new("Hello, Goodbye", "Band", "Pop", 180))
        .unwrap();
    s.rate("Hello, Goodbye", rating(4)).unwrap();

    let loaded = decode(&encode(&s), &Settings::default()).unwrap();
    let (_, t) = loaded.lookup("Hello, Goodbye").unwrap();
    assert_eq!(t.artist, "Band");
    assert_eq!(loaded.tracks_with_rating(rating(4)).len(), 1);
}

#[test]
fn unknown_titles_are_dropped() {
    let text = "\
[SONGS]
A,X,Jazz,10
[RATINGS]
Ghost,4
[HISTORY]
Ghost
A
[SKIPPED]
Ghost
[END]
";
    let s = decode(text, &Settings::default()).unwrap();
    assert_eq!(s.len(), 1);
    assert!(s.tracks_with_rating(rating(4)).is_empty());
    assert_eq!(s.history().len(), 1);
    assert!(s.skipped().is_empty());
}

#[test]
fn unknown_sections_and_stray_lines_are_skipped() {
    let text = "\
stray
[SONGS]
A,X,Jazz,10
[LYRICS]
la la la
[PLAY_COUNTS]
A,7
";
    let s = decode(text, &Settings::default()).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.play_counts().get("A"), 7);
}

#[test]
fn lines_after_end_are_ignored() {
    let text = "[SONGS]\nA,X,Jazz,10\n[END]\nB,X,Jazz,10\n";
    let s = decode(text, &Settings::default()).unwrap();
    assert_eq!(s.len(), 1);
}

#[test]
fn malformed_song_reports_line() {
    let text = "[SONGS]\nA,X,Jazz,10\nbroken line\n";
    match decode(text, &Settings::default()) {
        Err(Error::PersistenceCorrupt { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected corrupt error, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn bad_numbers_are_corrupt() {
    for text in [
        "[SONGS]\nA,X,Jazz,ten\n",
        "[SONGS]\nA,X,Jazz,10\n[PLAY_COUNTS]\nA,-1\n",
        "[SONGS]\nA,X,Jazz,10\n[RATINGS]\nA,9\n",
        "[SONGS]\nA,X,Jazz,10\n[RATINGS]\nA\n",
    ] {
        assert!(
            matches!(
                decode(text, &Settings::default()),
                Err(Error::PersistenceCorrupt { .. })
            ),
            "accepted: {text:?}"
        );
    }
}

#[test]
fn duplicate_song_is_corrupt() {
    let text = "[SONGS]\nA,X,Jazz,10\nA,Y,Rock,20\n";
    assert!(matches!(
        decode(text, &Settings::default()),
        Err(Error::PersistenceCorrupt { line: 3, .. })
    ));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let text = "[SONGS]\r\nA,X,Jazz,10\r\n[HISTORY]\r\nA\r\n[END]\r\n";
    let s = decode(text, &Settings::default()).unwrap();
    assert_eq!(s.history().len(), 1);
}

#[test]
fn commas_in_artist_or_genre_are_refused_before_they_reach_the_file() {
    let mut s = Session::default();
    let err = s
        .add_track(Track::new("Rain", "Smith, John", "Lo-Fi", 200))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "artist", .. }));
    assert!(matches!(
        s.add_track(Track::new("Rain", "Smith", "Lo-Fi, Chill", 200)),
        Err(Error::InvalidField { field: "genre", .. })
    ));
    assert!(s.is_empty());

    s.add_track(Track::new("Rain", "Smith John", "Lo-Fi", 200))
        .unwrap();
    s.rate("Rain", rating(5)).unwrap();
    let loaded = decode(&encode(&s), &Settings::default()).unwrap();
    let (_, t) = loaded.lookup("Rain").unwrap();
    assert_eq!(t.artist, "Smith John");
    assert_eq!(loaded.tracks_with_rating(rating(5)).len(), 1);
}

#[test]
fn header_shaped_titles_cannot_cut_a_file_short() {
    let mut s = Session::default();
    assert!(matches!(
        s.add_track(Track::new("[END]", "X", "Jazz", 10)),
        Err(Error::InvalidField { field: "title", .. })
    ));
    assert!(s.add_track(Track::new("[X]", "X", "Jazz", 10)).is_err());

    // brackets are fine as long as the title is not wholly wrapped in them
    s.add_track(Track::new("[Live] Intro", "X", "Jazz", 10))
        .unwrap();
    s.add_track(Track::new("B", "X", "Rock", 10)).unwrap();
    s.play_title("[Live] Intro").unwrap();
    s.skip("B").unwrap();

    let loaded = decode(&encode(&s), &Settings::default()).unwrap();
    assert_eq!(loaded.history().len(), 1);
    assert_eq!(loaded.skipped().len(), 1);
    assert_eq!(loaded.recently_added(10).len(), 2);
}

#[test]
fn empty_titles_are_refused_so_saved_files_stay_loadable() {
    let mut s = Session::default();
    assert!(matches!(
        s.add_track(Track::new("", "X", "Jazz", 10)),
        Err(Error::InvalidField { field: "title", .. })
    ));
    assert!(s.add_track(Track::new("   ", "X", "Jazz", 10)).is_err());
    s.add_track(Track::new("A", "X", "Jazz", 10)).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    s.save(&path).unwrap();
    assert_eq!(load(&path, &Settings::default()).unwrap().len(), 1);
}

#[test]
fn hand_edited_bad_fields_are_corrupt() {
    for text in [
        "[SONGS]\n[END],X,Jazz,10\n",
        "[SONGS]\n ,X,Jazz,10\n",
    ] {
        assert!(
            matches!(
                decode(text, &Settings::default()),
                Err(Error::PersistenceCorrupt { line: 2, .. })
            ),
            "accepted: {text:?}"
        );
    }
}
