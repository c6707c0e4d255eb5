use std::fmt::Write;

use crate::library::TrackId;
use crate::session::Session;

use super::Section;

/// Render `session` in the sectioned text format.
pub fn encode(session: &Session) -> String {
    let mut out = String::new();
    let registry = session.registry();
    let title_of = |id: TrackId| registry.get(id).map(|t| t.title.as_str());

    push_header(&mut out, Section::Songs);
    for (_, t) in session.tracks() {
        let _ = writeln!(out, "{},{},{},{}", t.title, t.artist, t.genre, t.duration);
    }

    push_header(&mut out, Section::PlayCounts);
    for (title, count) in session.play_counts().sorted() {
        let _ = writeln!(out, "{title},{count}");
    }

    push_header(&mut out, Section::Ratings);
    for (rating, id) in session.ratings().iter() {
        if let Some(title) = title_of(id) {
            let _ = writeln!(out, "{title},{rating}");
        }
    }

    push_header(&mut out, Section::History);
    for title in session.history().iter_oldest_first().filter_map(title_of) {
        let _ = writeln!(out, "{title}");
    }

    push_header(&mut out, Section::Skipped);
    for title in session.skipped_window().iter().filter_map(title_of) {
        let _ = writeln!(out, "{title}");
    }

    push_header(&mut out, Section::RecentAdded);
    for title in session.added_window().iter().filter_map(title_of) {
        let _ = writeln!(out, "{title}");
    }

    push_header(&mut out, Section::End);
    out
}

fn push_header(out: &mut String, section: Section) {
    out.push_str(section.header());
    out.push('\n');
}
