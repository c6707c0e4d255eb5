//! Command dispatch over a live session.

use std::io::Write;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::library::{Track, TrackId, display_from_fields};
use crate::session::{Playback, Session, genre_breakdown};

use super::commands::{Command, HELP};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: Session,
    settings: Settings,
    data_file: PathBuf,
}

impl Shell {
    pub fn new(session: Session, settings: Settings, data_file: PathBuf) -> Self {
        Self {
            session,
            settings,
            data_file,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn save(&self) -> Result<()> {
        self.session.save(&self.data_file)
    }

    fn show(&self, track: &Track) -> String {
        display_from_fields(
            track,
            &self.settings.ui.display_fields,
            &self.settings.ui.display_separator,
        )
    }

    fn show_id(&self, id: TrackId) -> String {
        self.session
            .track(id)
            .map(|t| self.show(t))
            .unwrap_or_else(|| id.to_string())
    }

    fn list(&self, out: &mut dyn Write, heading: &str, tracks: &[&Track]) -> Result<()> {
        writeln!(out, "{heading}:")?;
        if tracks.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for t in tracks {
            writeln!(out, "  {}", self.show(t))?;
        }
        Ok(())
    }

    /// Run one command, writing its output to `out`.
    ///
    /// Session errors (unknown title, duplicate title) are reported on `out`
    /// and do not stop the shell; I/O errors are returned.
    pub fn execute(&mut self, cmd: Command, out: &mut dyn Write) -> Result<Flow> {
        let mutates = cmd.mutates();
        let flow = match self.dispatch(cmd, out) {
            Ok(flow) => flow,
            Err(crate::Error::Io(e)) => return Err(e.into()),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        if flow == Flow::Quit {
            self.save()?;
            info!("shell: saved on quit");
        } else if mutates && self.settings.storage.autosave {
            if let Err(e) = self.save() {
                warn!("shell: autosave to {} failed: {e}", self.data_file.display());
            }
        }
        Ok(flow)
    }

    fn dispatch(&mut self, cmd: Command, out: &mut dyn Write) -> Result<Flow> {
        let ui = &self.settings.ui;
        match cmd {
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Config => match self.settings.to_toml() {
                Ok(text) => write!(out, "{text}")?,
                Err(e) => writeln!(out, "error: cannot render config: {e}")?,
            },
            Command::Save => {
                self.save()?;
                writeln!(out, "saved to {}", self.data_file.display())?;
            }
            Command::List => {
                let tracks = self.session.tracks();
                if tracks.is_empty() {
                    writeln!(out, "catalog is empty")?;
                }
                for (i, (_, t)) in tracks.iter().enumerate() {
                    writeln!(out, "{i:>3}. {} [{}]", self.show(t), t.duration_display())?;
                }
            }
            Command::Add {
                title,
                artist,
                genre,
                duration,
            } => {
                let id = self
                    .session
                    .add_track(Track::new(title, artist, genre, duration))?;
                writeln!(out, "added {}", self.show_id(id))?;
            }
            Command::Remove(index) => match self.session.remove_at(index) {
                Some(t) => writeln!(out, "removed {}", self.show(&t))?,
                None => writeln!(out, "no track at position {index}")?,
            },
            Command::Move { from, to } => {
                self.session.move_track(from, to);
                writeln!(out, "moved {from} -> {to}")?;
            }
            Command::Reverse => {
                self.session.reverse();
                writeln!(out, "reversed {} tracks", self.session.len())?;
            }
            Command::Search(title) => match self.session.lookup(&title) {
                Some((_, t)) => writeln!(
                    out,
                    "{} | {} | {} | {}",
                    t.title,
                    t.artist,
                    t.genre,
                    t.duration_display()
                )?,
                None => writeln!(out, "no track titled '{title}'")?,
            },
            Command::Rate { title, rating } => {
                self.session.rate(&title, rating)?;
                writeln!(out, "rated '{title}' {rating} stars")?;
            }
            Command::Unrate { title, rating } => {
                if self.session.unrate(&title, rating)? {
                    writeln!(out, "removed {rating}-star rating from '{title}'")?;
                } else {
                    writeln!(out, "'{title}' was not rated {rating}")?;
                }
            }
            Command::Rated(rating) => {
                let tracks = self.session.tracks_with_rating(rating);
                self.list(out, &format!("rated {rating}"), &tracks)?;
            }
            Command::Play(title) => {
                let count = self.session.play_title(&title)?;
                writeln!(out, "playing '{title}' (played {count} times)")?;
            }
            Command::PlayAll => {
                let outcome = self.session.play_all();
                for id in &outcome.played {
                    writeln!(out, "playing {}", self.show_id(*id))?;
                }
                self.report_replay(out, &outcome.replayed)?;
            }
            Command::Next => {
                let step = self.session.play_next();
                self.report_step(out, step)?;
            }
            Command::Prev => {
                let step = self.session.play_previous();
                self.report_step(out, step)?;
            }
            Command::Current => match self.session.current() {
                Some((i, t)) => writeln!(out, "now playing {i}: {}", self.show(t))?,
                None => writeln!(out, "stopped")?,
            },
            Command::Undo => match self.session.undo_last_play() {
                Some(t) => {
                    let shown = display_from_fields(t, &ui.display_fields, &ui.display_separator);
                    writeln!(out, "undid play of {shown}")?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Skip(title) => {
                self.session.skip(&title)?;
                writeln!(out, "skipped '{title}'")?;
            }
            Command::Skipped => {
                let tracks = self.session.skipped();
                self.list(out, "recently skipped", &tracks)?;
            }
            Command::ClearSkipped => {
                self.session.clear_skipped();
                writeln!(out, "skip history cleared")?;
            }
            Command::Recent(limit) => {
                let tracks = self
                    .session
                    .recently_added(limit.unwrap_or(ui.recently_added_limit));
                self.list(out, "recently added", &tracks)?;
            }
            Command::LastAdded => match self.session.last_added() {
                Some(t) => writeln!(out, "last added: {}", self.show(t))?,
                None => writeln!(out, "nothing added recently")?,
            },
            Command::Genres => {
                let tracks = self.session.recently_added(self.session.added_window().capacity());
                writeln!(out, "recently added by genre:")?;
                for (genre, n) in genre_breakdown(&tracks) {
                    writeln!(out, "  {genre}: {n}")?;
                }
            }
            Command::RecentGenre { genre, limit } => {
                let limit = limit.unwrap_or(ui.recently_added_limit);
                let tracks = self.session.recently_added_by_genre(&genre, limit);
                self.list(out, &format!("recently added {genre}"), &tracks)?;
            }
            Command::ClearRecent => {
                self.session.clear_recently_added();
                writeln!(out, "recently added cleared")?;
            }
            Command::Report => {
                let report = self
                    .session
                    .report(ui.longest_limit, ui.recently_played_limit);
                self.list(out, "longest", &report.longest)?;
                self.list(out, "recently played", &report.recently_played)?;
                writeln!(out, "ratings:")?;
                for (rating, n) in &report.counts_by_rating {
                    writeln!(out, "  {rating} stars: {n}")?;
                }
                writeln!(out, "play counts:")?;
                for (title, n) in &report.play_counts {
                    writeln!(out, "  {title}: {n}")?;
                }
            }
            Command::Sort(key) => {
                let tracks = self.session.sorted(key);
                self.list(out, "sorted", &tracks)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn report_step(&self, out: &mut dyn Write, step: Playback) -> Result<()> {
        match step {
            Playback::Played(id) => writeln!(out, "playing {}", self.show_id(id))?,
            Playback::EndReached { replayed } => {
                writeln!(out, "end of catalog")?;
                self.report_replay(out, &replayed)?;
            }
            Playback::AtStart => writeln!(out, "already at the first track")?,
            Playback::Empty => writeln!(out, "catalog is empty")?,
        }
        Ok(())
    }

    fn report_replay(&self, out: &mut dyn Write, replayed: &[TrackId]) -> Result<()> {
        if replayed.is_empty() {
            return Ok(());
        }
        writeln!(out, "auto-replay:")?;
        for id in replayed {
            writeln!(out, "  {}", self.show_id(*id))?;
        }
        Ok(())
    }
}
