use crate::cd::{SectorLayout, TrackMode};

/// MM:SS:FF time code; 75 frames (sectors) per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    /// Absolute frame count from the start of the image.
    pub fn total_frames(&self) -> u64 {
        (self.minutes as u64 * 60 + self.seconds as u64) * 75 + self.frames as u64
    }
}

/// One contiguous run of sectors in the source image, fully resolved and
/// read-only by the time extraction starts.
#[derive(Debug, Clone)]
pub struct Track {
    pub number: u32,
    /// Mode token as written in the cue sheet, e.g. `MODE1/2352`.
    pub mode_token: String,
    pub mode: TrackMode,
    pub audio: bool,
    /// Extension of the output file this track is written to.
    pub extension: &'static str,
    pub layout: SectorLayout,
    /// Inclusive sector bounds within the source image.
    pub start_sector: u64,
    pub stop_sector: u64,
    /// Byte bounds derived from the sector bounds. The final track's stop
    /// byte is the source file length, since no cue entry terminates it.
    pub start_byte: u64,
    pub stop_byte: u64,
}

impl Track {
    /// Number of whole sectors the cue sheet assigns to this track.
    pub fn sector_count(&self) -> u64 {
        (self.stop_sector + 1).saturating_sub(self.start_sector)
    }
}
