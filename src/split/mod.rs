use crate::cd::SECTOR_SIZE;
use crate::commands::Cli;
use crate::cue::CueParser;
use crate::cue::models::Track;
use crate::split::error::{SplitError, SplitResult};
use crate::wav::WavHeader;
use binrw::BinWrite;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::{Cursor, ErrorKind, SeekFrom};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt, BufReader, BufWriter};

pub mod error;

/// Sectors copied between two pushes to the progress bar.
const PROGRESS_INTERVAL: u64 = 500;

/// What extraction produced for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackOutput {
    pub path: PathBuf,
    /// Payload bytes actually copied, excluding any WAV header.
    pub bytes_written: u64,
    /// Payload bytes the resolved track promised. Smaller `bytes_written`
    /// means the image ended before the track did.
    pub expected_bytes: u64,
}

/// Splits the BIN image into one output file per cue sheet track.
pub async fn split_image(pb: MultiProgress, cli: Cli) -> SplitResult<Vec<TrackOutput>> {
    let bin_size = tokio::fs::metadata(&cli.bin_file).await?.len();

    debug!("Reading cue sheet {:?}", cli.cue_file);
    let tracks = CueParser::new(&cli.cue_file).parse(bin_size, &cli).await?;

    let base_name = cli
        .cue_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .ok_or_else(|| SplitError::NoBaseName(cli.cue_file.clone()))?;
    let out_dir = cli.output_dir.clone().unwrap_or_default();

    debug!("Opening image {:?} ({bin_size} bytes)", cli.bin_file);
    let file = File::open(&cli.bin_file).await?;
    let mut reader = BufReader::with_capacity(8 * 1024 * 1024, file); // 8 MB buffer

    info!("Splitting {:?} into {} track(s)", cli.bin_file, tracks.len());

    let mut outputs = Vec::with_capacity(tracks.len());

    for track in &tracks {
        let file_name = format!("{base_name}{:02}.{}", track.number, track.extension);
        let path = out_dir.join(file_name);
        let output = write_track(&mut reader, track, bin_size, path, &cli, &pb).await?;

        outputs.push(output);
    }

    Ok(outputs)
}

/// Copies one track's payload into its own file, sector by sector.
async fn write_track(
    reader: &mut BufReader<File>,
    track: &Track,
    bin_size: u64,
    path: PathBuf,
    cli: &Cli,
    pb: &MultiProgress,
) -> SplitResult<TrackOutput> {
    // The final track's stop bound comes from the file length and may
    // overshoot the last whole sector; size the header and the progress bar
    // from what the image actually holds.
    let available = (bin_size / SECTOR_SIZE as u64).saturating_sub(track.start_sector);
    let sectors = track.sector_count().min(available);
    let expected_bytes = sectors * track.layout.data_size as u64;

    info!("Track {:2}: {:<12} -> {:?}", track.number, track.mode_token, path);
    debug!(
        " sectors {}..={}, bytes {}..={}",
        track.start_sector, track.stop_sector, track.start_byte, track.stop_byte
    );
    debug!(
        " payload at offset {}, {} bytes per sector, {} bytes total",
        track.layout.data_offset, track.layout.data_size, expected_bytes
    );

    let file = File::create(&path).await?;
    let mut writer = BufWriter::with_capacity(8 * 1024 * 1024, file); // 8 MB buffer

    let bar = pb.add(ProgressBar::new(expected_bytes));
    bar.set_style(
        ProgressStyle::with_template("{msg:<16} [{bar:40}] {bytes}/{total_bytes}")?
            .progress_chars("#>-"),
    );
    bar.set_message(
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    if track.audio && cli.to_wav {
        let header = WavHeader::pcm_stereo(wav_payload_size(expected_bytes));
        let mut header_data = Cursor::new(Vec::new());
        header.write(&mut header_data)?;
        writer.write_all(&header_data.into_inner()).await?;
    }

    reader.seek(SeekFrom::Start(track.start_byte)).await?;

    let payload_start = track.layout.data_offset;
    let payload_end = payload_start + track.layout.data_size;
    let mut sector_data = vec![0u8; SECTOR_SIZE];
    let mut bytes_written = 0u64;
    let mut sector = track.start_sector;

    while sector <= track.stop_sector {
        match reader.read_exact(&mut sector_data).await {
            Ok(_) => {}
            // The image ran out before the cue sheet did; the track simply
            // ends here.
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        if track.audio && cli.swab_audio {
            swap_sample_bytes(&mut sector_data[payload_start..payload_end]);
        }

        writer.write_all(&sector_data[payload_start..payload_end]).await?;

        bytes_written += track.layout.data_size as u64;
        sector += 1;

        if (sector - track.start_sector) % PROGRESS_INTERVAL == 0 {
            bar.set_position(bytes_written);
        }
    }

    writer.flush().await?;

    bar.set_position(bytes_written);
    bar.finish();

    Ok(TrackOutput {
        path,
        bytes_written,
        expected_bytes,
    })
}

/// WAV length fields are 32-bit; a payload past the format cap saturates
/// instead of wrapping.
fn wav_payload_size(expected_bytes: u64) -> u32 {
    u32::try_from(expected_bytes).unwrap_or(u32::MAX)
}

/// Swaps every adjacent byte pair in place, turning little-endian samples
/// into big-endian ones and back. An odd trailing byte is left alone.
fn swap_sample_bytes(payload: &mut [u8]) {
    for pair in payload.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}
