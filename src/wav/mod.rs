use binrw::{BinRead, BinWrite};

pub const RIFF_CHUNK_LEN: u32 = 12;
pub const FORMAT_CHUNK_LEN: u32 = 24;
pub const DATA_CHUNK_LEN: u32 = 8;

/// Total bytes of the synthesized header.
pub const HEADER_LEN: u32 = RIFF_CHUNK_LEN + FORMAT_CHUNK_LEN + DATA_CHUNK_LEN;

/// Canonical 44-byte PCM WAV header, little-endian throughout. Audio tracks
/// on a CD are always 16-bit stereo at 44.1 kHz, so everything except the two
/// length fields is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
#[brw(magic = b"RIFF")]
pub struct WavHeader {
    /// File length minus the 8-byte RIFF preamble (payload + 36).
    pub riff_size: u32,

    #[brw(magic = b"WAVEfmt ")]
    /// Length of the format descriptor (16 for plain PCM).
    pub format_len: u32,

    /// 1 = uncompressed PCM.
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,

    #[brw(magic = b"data")]
    /// Byte length of the sample data that follows the header.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for a 16-bit stereo 44.1 kHz PCM stream of `data_size` bytes.
    /// The format caps every length at 32 bits, so `riff_size` saturates
    /// rather than wrapping when `data_size` sits at that cap.
    pub fn pcm_stereo(data_size: u32) -> Self {
        Self {
            riff_size: data_size.saturating_add(FORMAT_CHUNK_LEN + DATA_CHUNK_LEN + 4),
            format_len: 16,
            format_tag: 1,
            channels: 2,
            sample_rate: 44100,
            byte_rate: 44100 * 4,
            block_align: 4,
            bits_per_sample: 16,
            data_size,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};
    use std::io::Cursor;

    fn header_bytes(data_size: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        WavHeader::pcm_stereo(data_size).write(&mut buf).unwrap();

        buf.into_inner()
    }

    #[test]
    fn header_is_exactly_44_bytes() {
        assert_eq!(header_bytes(23520).len(), HEADER_LEN as usize);
        assert_eq!(HEADER_LEN, 44);
    }

    #[test]
    fn header_fields_match_the_pcm_descriptor() {
        let buf = header_bytes(23520);

        assert_eq!(&buf[0..4], b"RIFF");
        assert_eq!(LittleEndian::read_u32(&buf[4..8]), 23520 + 36);
        assert_eq!(&buf[8..12], b"WAVE");
        assert_eq!(&buf[12..16], b"fmt ");
        assert_eq!(LittleEndian::read_u32(&buf[16..20]), 16);
        assert_eq!(LittleEndian::read_u16(&buf[20..22]), 1);
        assert_eq!(LittleEndian::read_u16(&buf[22..24]), 2);
        assert_eq!(LittleEndian::read_u32(&buf[24..28]), 44100);
        assert_eq!(LittleEndian::read_u32(&buf[28..32]), 176400);
        assert_eq!(LittleEndian::read_u16(&buf[32..34]), 4);
        assert_eq!(LittleEndian::read_u16(&buf[34..36]), 16);
        assert_eq!(&buf[36..40], b"data");
        assert_eq!(LittleEndian::read_u32(&buf[40..44]), 23520);
    }

    #[test]
    fn riff_size_saturates_for_a_capped_payload() {
        let header = WavHeader::pcm_stereo(u32::MAX);

        assert_eq!(header.data_size, u32::MAX);
        assert_eq!(header.riff_size, u32::MAX);
    }

    #[test]
    fn header_round_trips_through_binrw() {
        let header = WavHeader::pcm_stereo(172_224);

        let mut buf = Cursor::new(Vec::new());
        header.write(&mut buf).unwrap();

        let mut cursor = Cursor::new(buf.into_inner());
        let read_back = WavHeader::read(&mut cursor).unwrap();

        assert_eq!(header, read_back);
        assert_eq!(read_back.data_size, 172_224);
        assert_eq!(read_back.riff_size, 172_224 + 36);
    }
}
