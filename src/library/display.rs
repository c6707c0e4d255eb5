use crate::config::TrackDisplayField;

use super::model::Track;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// Blank metadata fields are left out; when nothing is left the title is
/// used on its own.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackDisplayField::Artist => {
                let a = track.artist.trim();
                if !a.is_empty() {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Genre => {
                let g = track.genre.trim();
                if !g.is_empty() {
                    parts.push(g.to_string());
                }
            }
            TrackDisplayField::Duration => {
                parts.push(track.duration_display());
            }
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}
