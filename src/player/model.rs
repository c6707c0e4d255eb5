//! Player model types: `Player`, `PlaybackState` and `Step`.

/// The playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    /// Playing the catalog entry at this 0-based position.
    Playing(usize),
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Outcome of a navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved to this position; the caller records a play event.
    Played(usize),
    /// Ran off the end; the player is now stopped.
    EndReached,
    /// Already at the first track; nothing changed.
    AtStart,
    /// The catalog is empty.
    Empty,
}

#[derive(Debug, Default)]
pub struct Player {
    state: PlaybackState,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            PlaybackState::Playing(i) => Some(i),
            PlaybackState::Stopped => None,
        }
    }

    /// Advance by one. From `Stopped` playback starts at the first track.
    pub fn play_next(&mut self, len: usize) -> Step {
        if len == 0 {
            return Step::Empty;
        }
        let next = match self.state {
            PlaybackState::Playing(i) => i + 1,
            PlaybackState::Stopped => 0,
        };
        if next < len {
            self.state = PlaybackState::Playing(next);
            Step::Played(next)
        } else {
            self.state = PlaybackState::Stopped;
            Step::EndReached
        }
    }

    /// Step back by one; at the first track (or stopped) this is a no-op.
    pub fn play_previous(&mut self, len: usize) -> Step {
        if len == 0 {
            return Step::Empty;
        }
        match self.state {
            PlaybackState::Playing(i) if i > 0 => {
                let prev = (i - 1).min(len - 1);
                self.state = PlaybackState::Playing(prev);
                Step::Played(prev)
            }
            _ => Step::AtStart,
        }
    }

    /// Visit every position in order. Ends stopped.
    pub fn play_all(&mut self, len: usize) -> Vec<usize> {
        self.state = PlaybackState::Stopped;
        (0..len).collect()
    }

    /// Point a playing player at `index`, used when the catalog is reordered
    /// under the current track. A stopped player stays stopped.
    pub fn seek(&mut self, index: usize) {
        if let PlaybackState::Playing(_) = self.state {
            self.state = PlaybackState::Playing(index);
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Keep the position pointing at the same track after the catalog lost
    /// the entry at `index`.
    pub fn on_removed(&mut self, index: usize) {
        if let PlaybackState::Playing(i) = self.state {
            if index < i {
                self.state = PlaybackState::Playing(i - 1);
            } else if index == i {
                self.state = PlaybackState::Stopped;
            }
        }
    }
}
