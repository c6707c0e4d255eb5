//! Shell command grammar.
//!
//! A line is a command word followed by `|`-separated arguments:
//! `add Rain|Artist1|Lo-Fi|200`, `move 0|2`, `rate Rain|5`.

use crate::ratings::Rating;
use crate::session::SortKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Config,
    Save,
    List,
    Add {
        title: String,
        artist: String,
        genre: String,
        duration: u32,
    },
    Remove(usize),
    Move {
        from: usize,
        to: usize,
    },
    Reverse,
    Search(String),
    Rate {
        title: String,
        rating: Rating,
    },
    Unrate {
        title: String,
        rating: Rating,
    },
    Rated(Rating),
    Play(String),
    PlayAll,
    Next,
    Prev,
    Current,
    Undo,
    Skip(String),
    Skipped,
    ClearSkipped,
    Recent(Option<usize>),
    LastAdded,
    Genres,
    RecentGenre {
        genre: String,
        limit: Option<usize>,
    },
    ClearRecent,
    Report,
    Sort(SortKey),
}

impl Command {
    /// Whether running this command can change what gets saved.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Remove(_)
                | Self::Move { .. }
                | Self::Reverse
                | Self::Rate { .. }
                | Self::Unrate { .. }
                | Self::Play(_)
                | Self::PlayAll
                | Self::Next
                | Self::Prev
                | Self::Undo
                | Self::Skip(_)
                | Self::ClearSkipped
                | Self::ClearRecent
        )
    }
}

pub const HELP: &str = "\
commands (arguments are separated by '|'):
  add TITLE|ARTIST|GENRE|SECONDS   add a track at the end
  remove INDEX                     remove the track at INDEX
  move FROM|TO                     move a track so it ends up at TO
  reverse                          reverse the catalog
  list                             show the catalog
  search TITLE                     look a track up by title
  rate TITLE|STARS                 rate a track 1-5
  unrate TITLE|STARS               take a rating away
  rated STARS                      tracks with that rating
  play TITLE                       play one track
  playall                          play everything, then auto-replay
  next / prev                      step through the catalog
  current                          the track being played
  undo                             forget the last play
  skip TITLE                       mark a track as skipped
  skipped / clearskipped           show or clear skipped tracks
  recent [LIMIT]                   recently added tracks
  last                             the last track added
  genres                           genre breakdown of recent additions
  recentgenre GENRE[|LIMIT]        recent additions in one genre
  clearrecent                      clear recently added
  report                           snapshot of the session
  sort title|duration              sorted view of the catalog
  config                           print the effective configuration
  save                             write the data file now
  quit                             save and exit";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('|').map(str::trim).collect()
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "" => return Err("empty command".to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "config" => Command::Config,
        "save" => Command::Save,
        "list" | "ls" => Command::List,
        "add" => {
            expect_args(word, &args, 4)?;
            Command::Add {
                title: non_empty("title", args[0])?,
                artist: args[1].to_string(),
                genre: args[2].to_string(),
                duration: args[3]
                    .parse()
                    .map_err(|_| format!("duration '{}' is not a number of seconds", args[3]))?,
            }
        }
        "remove" | "rm" => {
            expect_args(word, &args, 1)?;
            Command::Remove(index(args[0])?)
        }
        "move" | "mv" => {
            expect_args(word, &args, 2)?;
            Command::Move {
                from: index(args[0])?,
                to: index(args[1])?,
            }
        }
        "reverse" => Command::Reverse,
        "search" | "find" => {
            expect_args(word, &args, 1)?;
            Command::Search(args[0].to_string())
        }
        "rate" | "unrate" => {
            expect_args(word, &args, 2)?;
            let title = args[0].to_string();
            let rating = stars(args[1])?;
            if word.eq_ignore_ascii_case("rate") {
                Command::Rate { title, rating }
            } else {
                Command::Unrate { title, rating }
            }
        }
        "rated" => {
            expect_args(word, &args, 1)?;
            Command::Rated(stars(args[0])?)
        }
        "play" => {
            expect_args(word, &args, 1)?;
            Command::Play(args[0].to_string())
        }
        "playall" => Command::PlayAll,
        "next" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "current" => Command::Current,
        "undo" => Command::Undo,
        "skip" => {
            expect_args(word, &args, 1)?;
            Command::Skip(args[0].to_string())
        }
        "skipped" => Command::Skipped,
        "clearskipped" => Command::ClearSkipped,
        "recent" => match args.as_slice() {
            [] => Command::Recent(None),
            [limit] => Command::Recent(Some(index(limit)?)),
            _ => return Err(arity(word, 1, args.len())),
        },
        "last" => Command::LastAdded,
        "genres" => Command::Genres,
        "recentgenre" => match args.as_slice() {
            [genre] => Command::RecentGenre {
                genre: genre.to_string(),
                limit: None,
            },
            [genre, limit] => Command::RecentGenre {
                genre: genre.to_string(),
                limit: Some(index(limit)?),
            },
            _ => return Err(arity(word, 2, args.len())),
        },
        "clearrecent" => Command::ClearRecent,
        "report" => Command::Report,
        "sort" => {
            expect_args(word, &args, 1)?;
            Command::Sort(args[0].parse()?)
        }
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(cmd)
}

fn expect_args(word: &str, args: &[&str], n: usize) -> Result<(), String> {
    if args.len() == n {
        Ok(())
    } else {
        Err(arity(word, n, args.len()))
    }
}

fn arity(word: &str, n: usize, got: usize) -> String {
    format!("'{word}' takes {n} argument(s), got {got}")
}

fn index(s: &str) -> Result<usize, String> {
    s.parse().map_err(|_| format!("'{s}' is not a position"))
}

fn stars(s: &str) -> Result<Rating, String> {
    let value: u8 = s.parse().map_err(|_| format!("'{s}' is not a rating"))?;
    Rating::new(value).map_err(|e| e.to_string())
}

fn non_empty(what: &str, s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err(format!("{what} must not be empty"))
    } else {
        Ok(s.to_string())
    }
}
