/// Fixed size of one physical sector in a raw CD image, regardless of track mode.
pub const SECTOR_SIZE: usize = 2352;

/// Track mode token from the cue sheet. Anything outside the supported set is
/// `Unknown` and copied whole-sector so the user can inspect the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Mode1_2352,
    Mode2_2352,
    Mode2_2336,
    Audio,
    Unknown,
}

/// Byte region of each 2352-byte sector that reaches the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorLayout {
    /// Bytes discarded at the start of every sector (sync/header fields).
    pub data_offset: usize,
    /// Payload bytes copied per sector. `data_offset + data_size` may be less
    /// than 2352: some modes also discard trailing EDC/ECC bytes.
    pub data_size: usize,
}

impl TrackMode {
    pub fn from_token(token: &str) -> TrackMode {
        match token.to_ascii_uppercase().as_str() {
            "MODE1/2352" => TrackMode::Mode1_2352,
            "MODE2/2352" => TrackMode::Mode2_2352,
            "MODE2/2336" => TrackMode::Mode2_2336,
            "AUDIO" => TrackMode::Audio,
            _ => TrackMode::Unknown,
        }
    }

    pub fn is_audio(self) -> bool {
        self == TrackMode::Audio
    }

    /// Resolves the per-sector payload region. `raw` wins over `psx_truncate`
    /// when both are set; both flags only affect MODE2/2352.
    pub fn layout(self, raw: bool, psx_truncate: bool) -> SectorLayout {
        match self {
            TrackMode::Mode1_2352 => SectorLayout {
                data_offset: 16,
                data_size: 2048,
            },
            TrackMode::Mode2_2352 if raw => SectorLayout {
                data_offset: 0,
                data_size: 2352,
            },
            TrackMode::Mode2_2352 if psx_truncate => SectorLayout {
                data_offset: 0,
                data_size: 2336,
            },
            TrackMode::Mode2_2352 => SectorLayout {
                data_offset: 24,
                data_size: 2048,
            },
            TrackMode::Mode2_2336 => SectorLayout {
                data_offset: 16,
                data_size: 2336,
            },
            TrackMode::Audio | TrackMode::Unknown => SectorLayout {
                data_offset: 0,
                data_size: SECTOR_SIZE,
            },
        }
    }

    pub fn extension(self, to_wav: bool) -> &'static str {
        match self {
            TrackMode::Audio if to_wav => "wav",
            TrackMode::Audio => "cdr",
            TrackMode::Unknown => "ugh",
            _ => "iso",
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn mode1_layout_ignores_flags() {
        let expected = SectorLayout {
            data_offset: 16,
            data_size: 2048,
        };

        assert_eq!(TrackMode::Mode1_2352.layout(false, false), expected);
        assert_eq!(TrackMode::Mode1_2352.layout(true, false), expected);
        assert_eq!(TrackMode::Mode1_2352.layout(false, true), expected);
        assert_eq!(TrackMode::Mode1_2352.layout(true, true), expected);
    }

    #[test]
    fn mode2_2352_layout_follows_flags() {
        let mode = TrackMode::Mode2_2352;

        assert_eq!(
            mode.layout(false, false),
            SectorLayout {
                data_offset: 24,
                data_size: 2048,
            }
        );
        assert_eq!(
            mode.layout(true, false),
            SectorLayout {
                data_offset: 0,
                data_size: 2352,
            }
        );
        assert_eq!(
            mode.layout(false, true),
            SectorLayout {
                data_offset: 0,
                data_size: 2336,
            }
        );
    }

    #[test]
    fn raw_wins_over_psx_truncate() {
        assert_eq!(
            TrackMode::Mode2_2352.layout(true, true),
            SectorLayout {
                data_offset: 0,
                data_size: 2352,
            }
        );
    }

    #[test]
    fn mode2_2336_keeps_subheader_payload() {
        assert_eq!(
            TrackMode::Mode2_2336.layout(false, false),
            SectorLayout {
                data_offset: 16,
                data_size: 2336,
            }
        );
    }

    #[test]
    fn audio_copies_whole_sectors() {
        let layout = TrackMode::Audio.layout(false, false);

        assert_eq!(layout.data_offset, 0);
        assert_eq!(layout.data_size, SECTOR_SIZE);
        assert!(TrackMode::Audio.is_audio());
    }

    #[test]
    fn unknown_mode_falls_back_to_whole_sectors() {
        let mode = TrackMode::from_token("CDI/2336");

        assert_eq!(mode, TrackMode::Unknown);
        assert_eq!(
            mode.layout(false, false),
            SectorLayout {
                data_offset: 0,
                data_size: SECTOR_SIZE,
            }
        );
        assert_eq!(mode.extension(false), "ugh");
        assert!(!mode.is_audio());
    }

    #[test]
    fn token_match_is_case_insensitive() {
        assert_eq!(TrackMode::from_token("mode1/2352"), TrackMode::Mode1_2352);
        assert_eq!(TrackMode::from_token("Audio"), TrackMode::Audio);
        assert_eq!(TrackMode::from_token("mode2/2336"), TrackMode::Mode2_2336);
    }

    #[test]
    fn audio_extension_depends_on_container() {
        assert_eq!(TrackMode::Audio.extension(true), "wav");
        assert_eq!(TrackMode::Audio.extension(false), "cdr");
        assert_eq!(TrackMode::Mode1_2352.extension(true), "iso");
        assert_eq!(TrackMode::Mode2_2352.extension(false), "iso");
    }
}
