//! Interactive shell: settings, logging, the session and the read loop.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::session::Session;

pub mod commands;
mod settings;
mod shell;

pub use shell::{Flow, Shell};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();

    let level = settings.log_level().unwrap_or(log::LevelFilter::Info);
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
    if let Some(msg) = fallback {
        warn!("config: {msg}");
    }

    // An explicit path on the command line wins over `storage.data_file`.
    let data_file = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.storage.data_file.clone());

    let session = Session::load(&data_file, &settings)?;
    info!(
        "setlist: {} tracks, data file {}",
        session.len(),
        data_file.display()
    );

    let mut shell = Shell::new(session, settings, data_file);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match commands::parse(&line) {
            Ok(cmd) => {
                if shell.execute(cmd, &mut out)? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(msg) => writeln!(out, "error: {msg}")?,
        }
        out.flush()?;
    }

    // EOF behaves like quit.
    shell.save()?;
    info!("setlist: saved on end of input");
    Ok(())
}
