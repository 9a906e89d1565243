use clap::Parser;
use std::path::PathBuf;

/// CLI for splitting raw BIN/CUE CD images into per-track ISO and audio files.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Copy MODE2/2352 tracks raw, all 2352 bytes per sector (for VCD/MPEG)
    #[arg(long, short = 'r', value_name = "RAW", default_value_t = false)]
    pub raw: bool,

    /// Truncate MODE2/2352 tracks to 2336 bytes per sector (PSX images)
    #[arg(long = "psx", short = 'p', value_name = "PSX", default_value_t = false)]
    pub psx_truncate: bool,

    /// Wrap audio tracks in a WAV container instead of raw CDR output
    #[arg(long = "wav", short = 'w', value_name = "WAV", default_value_t = false)]
    pub to_wav: bool,

    /// Swap the byte order of audio samples
    #[arg(long = "swab", short = 's', value_name = "SWAB", default_value_t = false)]
    pub swab_audio: bool,

    /// Log sector geometry and byte ranges while splitting
    #[arg(long, short = 'v', value_name = "VERBOSE", default_value_t = false)]
    pub verbose: bool,

    /// Input BIN image holding the raw 2352-byte sectors
    #[arg(value_name = "IMAGE_BIN")]
    pub bin_file: PathBuf,

    /// Input cue sheet describing the track layout
    #[arg(value_name = "IMAGE_CUE")]
    pub cue_file: PathBuf,

    /// Directory the track files are written to, defaults to the working directory
    #[arg(long, short = 'o', value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
