use crate::cd::{SECTOR_SIZE, TrackMode};
use crate::commands::Cli;
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{Msf, Track};
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;

/// A track as scanned from the cue text, before its stop bound is known.
struct ScannedTrack {
    number: u32,
    mode_token: String,
    mode: TrackMode,
    start_sector: Option<u64>,
}

pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    /// Parses the cue sheet into fully resolved tracks. `bin_size` is the
    /// byte length of the BIN image; it terminates the final track, which no
    /// cue entry closes.
    pub async fn parse(&self, bin_size: u64, cli: &Cli) -> CueResult<Vec<Track>> {
        let text = tokio::fs::read_to_string(&self.cue_path).await?;

        build_tracks(&text, bin_size, cli)
    }
}

fn build_tracks(text: &str, bin_size: u64, cli: &Cli) -> CueResult<Vec<Track>> {
    let scanned = scan_directives(text)?;

    resolve_ranges(scanned, bin_size, cli)
}

/// First pass: collect `(track, first index sector)` pairs in file order.
/// Malformed TRACK/INDEX directives are skipped with a warning; a malformed
/// time code aborts, since every byte range after it would be wrong.
fn scan_directives(text: &str) -> CueResult<Vec<ScannedTrack>> {
    let mut tracks: Vec<ScannedTrack> = Vec::new();

    // Line 1 carries the FILE reference; the image path comes from the
    // command line instead.
    for line in text.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("TRACK") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                warn!("Malformed TRACK line skipped: {line}");
                continue;
            }

            let number = match parts[1].parse::<u32>() {
                Ok(number) => number,
                Err(_) => {
                    warn!("Malformed TRACK line skipped: {line}");
                    continue;
                }
            };

            let mode = TrackMode::from_token(parts[2]);
            if mode == TrackMode::Unknown {
                warn!(
                    "Track {number}: unrecognized mode {}, copying whole sectors",
                    parts[2]
                );
            }

            debug!("Track {number}: {}", parts[2]);

            tracks.push(ScannedTrack {
                number,
                mode_token: parts[2].to_string(),
                mode,
                start_sector: None,
            });
        } else if line.starts_with("INDEX") {
            // An INDEX is only meaningful inside a track.
            let Some(track) = tracks.last_mut() else {
                continue;
            };

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                warn!("Malformed INDEX line skipped: {line}");
                continue;
            }

            let sector = parse_msf(parts[2])?.total_frames();

            debug!(
                "Track {}: index {} at {} (sector {sector})",
                track.number, parts[1], parts[2]
            );

            // The first index line wins; later ones (e.g. a 00 pregap listed
            // after 01) do not move the start.
            if track.start_sector.is_none() {
                track.start_sector = Some(sector);
            }
        }
    }

    Ok(tracks)
}

/// Second pass: derive each track's stop bound from its successor's start.
/// The final track is terminated by the physical image length.
fn resolve_ranges(scanned: Vec<ScannedTrack>, bin_size: u64, cli: &Cli) -> CueResult<Vec<Track>> {
    let located: Vec<(ScannedTrack, u64)> = scanned
        .into_iter()
        .filter_map(|track| match track.start_sector {
            Some(start) => Some((track, start)),
            None => {
                warn!("Track {} has no INDEX line, dropped", track.number);
                None
            }
        })
        .collect();

    if located.is_empty() {
        return Err(CueError::NoTracks);
    }

    let mut tracks = Vec::with_capacity(located.len());

    for (i, (track, start_sector)) in located.iter().enumerate() {
        let (stop_sector, stop_byte) = match located.get(i + 1) {
            Some((_, next_start)) => (
                next_start.saturating_sub(1),
                (next_start * SECTOR_SIZE as u64).saturating_sub(1),
            ),
            None => (bin_size / SECTOR_SIZE as u64, bin_size),
        };

        tracks.push(Track {
            number: track.number,
            mode_token: track.mode_token.clone(),
            mode: track.mode,
            audio: track.mode.is_audio(),
            extension: track.mode.extension(cli.to_wav),
            layout: track.mode.layout(cli.raw, cli.psx_truncate),
            start_sector: *start_sector,
            stop_sector,
            start_byte: start_sector * SECTOR_SIZE as u64,
            stop_byte,
        });
    }

    Ok(tracks)
}

/// Converts an `MM:SS:FF` time code into its parts. Fails unless the string
/// splits into exactly three unsigned integer components.
fn parse_msf(s: &str) -> CueResult<Msf> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(CueError::InvalidTimeCode(s.to_string()));
    }

    let parse = |part: &str| {
        part.parse::<u32>()
            .map_err(|_| CueError::InvalidTimeCode(s.to_string()))
    };

    Ok(Msf {
        minutes: parse(parts[0])?,
        seconds: parse(parts[1])?,
        frames: parse(parts[2])?,
    })
}
