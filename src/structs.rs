use std::{
    fmt::Debug,
    fs::File,
    io::Write,
    path::Path,
    slice::Iter,
};

use libflate::zlib::Encoder;
use log::{debug, info};

use crate::error::{Error, Result};

pub const HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Side length of the generated icon, in pixels.
pub const ICON_SIZE: u32 = 16;
pub const ICON_COLOUR: [u8; 4] = [50, 100, 200, 255];

// CRC-32 of the bare "IEND" tag; the chunk never carries a payload.
const IEND_CRC: u32 = 0xAE42_6082;
const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

#[derive(Clone, PartialEq, Eq)]
pub struct Data {
    pub data: Vec<u8>,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .data
            .chunks(16)
            .map(|row| {
                let bytes = row
                    .iter()
                    .map(|x| format!("0x{:02X}", x))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("\t{}", bytes)
            })
            .collect::<Vec<_>>()
            .join(",\n");
        write!(f, "[\n{}\n]", rows)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    pub size: u32,
    pub name: [u8; 4],
    pub data: Data,
    pub crc: u32,
}

impl Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{
    Size:\t {}
    Name:\t\"{}\"
    Data:\t{}
    CRC:\t{:08X}
}}",
            self.size,
            self.name_str(),
            format!("{:?}", self.data).replace('\n', "\n\t\t"),
            self.crc
        )
    }
}

impl Chunk {
    /// CRC-32 over the tag followed by the payload, as stored after every chunk.
    pub fn crc(name: &[u8; 4], data: &[u8]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(name);
        hasher.update(data);
        hasher.finalize()
    }

    pub fn check_crc(&self) -> bool {
        Chunk::crc(&self.name, self.data()) == self.crc
    }

    pub fn from_data(name: &[u8; 4], data: &[u8]) -> Result<Chunk> {
        if !is_valid_chunk_type(name) {
            return Err(Error::InvalidChunkType(*name));
        }
        Ok(Chunk {
            size: checked_length(data.len())?,
            name: *name,
            data: Data {
                data: data.to_owned(),
            },
            crc: Chunk::crc(name, data),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data.data
    }

    pub fn name_str(&self) -> String {
        bytes_to_ascii(&self.name)
    }

    /// Length on disk: length field, tag, payload and CRC.
    pub fn encoded_len(&self) -> usize {
        self.size as usize + 12
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        res.extend_from_slice(&self.size.to_be_bytes());
        res.extend_from_slice(&self.name);
        res.extend_from_slice(self.data());
        res.extend_from_slice(&self.crc.to_be_bytes());
        res
    }
}

fn checked_length(len: usize) -> Result<u32> {
    if len > MAX_CHUNK_LEN {
        return Err(Error::ChunkTooLarge(len));
    }
    Ok(len as u32)
}

fn is_valid_chunk_type(name: &[u8; 4]) -> bool {
    name.iter().all(|byte| byte.is_ascii_alphabetic())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourType {
    Grayscale,
    RGB,
    Palette,
    GrayscaleAlpha,
    RGBAlpha,
}

impl ColourType {
    pub fn valid_bit_depth(&self, bit_depth: u8) -> bool {
        match self {
            ColourType::Grayscale => [1, 2, 4, 8, 16].contains(&bit_depth),
            ColourType::RGB => [8, 16].contains(&bit_depth),
            ColourType::Palette => [1, 2, 4, 8].contains(&bit_depth),
            ColourType::GrayscaleAlpha => [8, 16].contains(&bit_depth),
            ColourType::RGBAlpha => [8, 16].contains(&bit_depth),
        }
    }

    pub fn get_code(&self) -> u8 {
        match self {
            ColourType::Grayscale => 0,
            ColourType::RGB => 2,
            ColourType::Palette => 3,
            ColourType::GrayscaleAlpha => 4,
            ColourType::RGBAlpha => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<ColourType> {
        match code {
            0 => Some(ColourType::Grayscale),
            2 => Some(ColourType::RGB),
            3 => Some(ColourType::Palette),
            4 => Some(ColourType::GrayscaleAlpha),
            6 => Some(ColourType::RGBAlpha),
            _ => None,
        }
    }

    /// Samples per pixel.
    pub fn channels(&self) -> u8 {
        match self {
            ColourType::Grayscale | ColourType::Palette => 1,
            ColourType::GrayscaleAlpha => 2,
            ColourType::RGB => 3,
            ColourType::RGBAlpha => 4,
        }
    }
}

/// The seven IHDR fields in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub colour_type: ColourType,
    pub compression: u8,
    pub filter_method: u8,
    pub interlace: u8,
}

impl Ihdr {
    pub fn new(width: u32, height: u32, bit_depth: u8, colour_type: ColourType) -> Ihdr {
        Ihdr {
            width,
            height,
            bit_depth,
            colour_type,
            compression: 0,   // deflate
            filter_method: 0, // adaptive, per-row filter byte
            interlace: 0,     // none
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidHeader(format!(
                "dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.colour_type.valid_bit_depth(self.bit_depth) {
            return Err(Error::InvalidHeader(format!(
                "bit depth {} not allowed for {:?}",
                self.bit_depth, self.colour_type
            )));
        }
        if self.colour_type == ColourType::Palette {
            return Err(Error::InvalidHeader(
                "indexed colour needs a PLTE chunk, which is not emitted".into(),
            ));
        }
        if self.compression != 0 || self.filter_method != 0 || self.interlace != 0 {
            return Err(Error::InvalidHeader(format!(
                "unsupported methods: compression {}, filter {}, interlace {}",
                self.compression, self.filter_method, self.interlace
            )));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; 13] {
        let mut res = [0u8; 13];
        res[0..4].copy_from_slice(&self.width.to_be_bytes());
        res[4..8].copy_from_slice(&self.height.to_be_bytes());
        res[8] = self.bit_depth;
        res[9] = self.colour_type.get_code();
        res[10] = self.compression;
        res[11] = self.filter_method;
        res[12] = self.interlace;
        res
    }

    pub fn to_chunk(&self) -> Result<Chunk> {
        self.validate()?;
        Chunk::from_data(b"IHDR", &self.to_bytes())
    }

    pub fn parse(chunk: &Chunk) -> Result<Ihdr> {
        if &chunk.name != b"IHDR" {
            return Err(Error::Malformed(format!(
                "expected IHDR, found {}",
                chunk.name_str()
            )));
        }
        let data = chunk.data();
        if data.len() != 13 {
            return Err(Error::Malformed(format!(
                "IHDR must be 13 bytes, found {}",
                data.len()
            )));
        }
        let colour_type = ColourType::from_code(data[9])
            .ok_or_else(|| Error::InvalidHeader(format!("unknown colour type {}", data[9])))?;
        let ihdr = Ihdr {
            width: bytes_to_u32(&data[0..4]),
            height: bytes_to_u32(&data[4..8]),
            bit_depth: data[8],
            colour_type,
            compression: data[10],
            filter_method: data[11],
            interlace: data[12],
        };
        ihdr.validate()?;
        Ok(ihdr)
    }

    /// Unfiltered bytes per scanline, excluding the filter byte.
    pub fn bytes_per_row(&self) -> Result<usize> {
        let bits_per_row = self.width as u64
            * self.bit_depth as u64
            * self.colour_type.channels() as u64;
        usize::try_from(bits_per_row.div_ceil(8))
            .map_err(|_| Error::Encoding(format!("row of {} bits too long", bits_per_row)))
    }
}

pub fn signature() -> [u8; 8] {
    HEADER
}

/// Prefixes every row with filter type 0, deflates the lot and wraps it as
/// one IDAT chunk.
pub fn idat_chunk(rows: &[Vec<u8>]) -> Result<Chunk> {
    let total = rows.iter().map(|row| row.len() + 1).sum();
    let mut uncompressed = Vec::with_capacity(total);
    for row in rows {
        uncompressed.push(0x00); // No filter
        uncompressed.extend_from_slice(row);
    }

    debug!("Compressing {} bytes of scanlines...", uncompressed.len());
    let data = compress_block(&uncompressed)?;
    if data.is_empty() {
        return Err(Error::Encoding("compressor produced no output".into()));
    }
    Chunk::from_data(b"IDAT", &data)
}

pub fn iend_chunk() -> Chunk {
    Chunk {
        size: 0,
        name: *b"IEND",
        data: Data { data: Vec::new() },
        crc: IEND_CRC,
    }
}

fn compress_block(data: &[u8]) -> Result<Vec<u8>> {
    let deflate_err = |e: std::io::Error| Error::Encoding(format!("zlib: {}", e));
    let mut encoder = Encoder::new(Vec::new()).map_err(deflate_err)?;
    encoder.write_all(data).map_err(deflate_err)?;
    encoder.finish().into_result().map_err(deflate_err)
}

#[derive(Debug, Clone)]
pub struct PNG {
    header: [u8; 8],
    pub ihdr: Ihdr,
    pub data: Vec<Vec<u8>>,
}

impl PNG {
    /// Blank image, every sample set to 0xFF.
    pub fn new(width: u32, height: u32, bit_depth: u8, colour_type: ColourType) -> Result<PNG> {
        let ihdr = Ihdr::new(width, height, bit_depth, colour_type);
        ihdr.validate()?;
        let bytes_per_row = ihdr.bytes_per_row()?;

        Ok(PNG {
            header: HEADER,
            ihdr,
            data: vec![vec![0xFF; bytes_per_row]; height as usize],
        })
    }

    /// The 16x16 solid icon.
    pub fn icon() -> PNG {
        PNG {
            header: HEADER,
            ihdr: Ihdr::new(ICON_SIZE, ICON_SIZE, 8, ColourType::RGBAlpha),
            data: vec![ICON_COLOUR.repeat(ICON_SIZE as usize); ICON_SIZE as usize],
        }
    }

    /// Paints every pixel of an 8-bit RGBA image with `rgba`.
    pub fn fill(&mut self, rgba: [u8; 4]) -> Result<()> {
        if self.ihdr.colour_type != ColourType::RGBAlpha || self.ihdr.bit_depth != 8 {
            return Err(Error::Encoding(format!(
                "fill needs 8-bit RGBA, image is {}-bit {:?}",
                self.ihdr.bit_depth, self.ihdr.colour_type
            )));
        }
        let row = rgba.repeat(self.ihdr.width as usize);
        for r in self.data.iter_mut() {
            r.clone_from(&row);
        }
        Ok(())
    }

    fn idat(&self) -> Result<Chunk> {
        if self.data.len() != self.ihdr.height as usize {
            return Err(Error::Encoding(format!(
                "header says {} rows, image has {}",
                self.ihdr.height,
                self.data.len()
            )));
        }
        let row_len = self.ihdr.bytes_per_row()?;
        if let Some((y, row)) = self
            .data
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != row_len)
        {
            return Err(Error::Encoding(format!(
                "row {} has {} bytes, expected {}",
                y,
                row.len(),
                row_len
            )));
        }
        idat_chunk(&self.data)
    }

    /// Signature, IHDR, IDAT and IEND as one buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let ihdr = self.ihdr.to_chunk()?;
        let idat = self.idat()?;
        let iend = iend_chunk();

        let mut res = Vec::with_capacity(
            self.header.len() + ihdr.encoded_len() + idat.encoded_len() + iend.encoded_len(),
        );
        res.extend_from_slice(&self.header);
        for chunk in [&ihdr, &idat, &iend] {
            res.extend_from_slice(&chunk.to_bytes());
        }
        Ok(res)
    }

    /// Encodes in memory, then writes the whole file in one go. Nothing is
    /// created on disk if encoding fails.
    pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_bytes(filepath, &bytes)
    }
}

/// Writes an already encoded buffer in a single call.
pub fn write_bytes<P: AsRef<Path>>(filepath: P, bytes: &[u8]) -> Result<()> {
    let filepath = filepath.as_ref();

    debug!("Writing {} bytes to {}", bytes.len(), filepath.display());
    let mut file = File::create(filepath)?;
    file.write_all(bytes)?;
    file.flush()?;

    info!("Saved {}", filepath.display());
    Ok(())
}

/// Splits a PNG byte stream into its chunks, checking the signature, every
/// CRC, and that the stream runs from IHDR to IEND with nothing after it.
pub fn read_chunks(bytes: &[u8]) -> Result<Vec<Chunk>> {
    let rest = bytes
        .strip_prefix(&HEADER[..])
        .ok_or(Error::InvalidSignature)?;
    let mut buffer = rest.iter();
    let mut chunks: Vec<Chunk> = Vec::new();

    while !buffer.as_slice().is_empty() {
        if chunks.last().is_some_and(|c| &c.name == b"IEND") {
            return Err(Error::Malformed(format!(
                "{} trailing bytes after IEND",
                buffer.len()
            )));
        }
        let chunk = get_chunk(&mut buffer)?;
        if chunks.is_empty() && &chunk.name != b"IHDR" {
            return Err(Error::Malformed(format!(
                "first chunk must be IHDR, found {}",
                chunk.name_str()
            )));
        }
        chunks.push(chunk);
    }

    match chunks.last() {
        Some(last) if &last.name == b"IEND" => Ok(chunks),
        _ => Err(Error::Malformed("stream does not end with IEND".into())),
    }
}

fn get_chunk(buffer: &mut Iter<u8>) -> Result<Chunk> {
    let size = bytes_to_u32(&take_bytes(buffer, 4)?);
    let name: [u8; 4] = take_bytes(buffer, 4)?
        .try_into()
        .map_err(|_| Error::Truncated)?;
    if !is_valid_chunk_type(&name) {
        return Err(Error::InvalidChunkType(name));
    }
    let data = take_bytes(buffer, size as usize)?;
    let crc = bytes_to_u32(&take_bytes(buffer, 4)?);

    let chunk = Chunk {
        size,
        name,
        data: Data { data },
        crc,
    };
    if !chunk.check_crc() {
        return Err(Error::CrcMismatch {
            chunk: chunk.name_str(),
            stored: chunk.crc,
            computed: Chunk::crc(&chunk.name, chunk.data()),
        });
    }
    Ok(chunk)
}

fn bytes_to_u32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |acc, &x| (acc << 8) + x as u32)
}

fn bytes_to_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&x| x as char).collect()
}

fn take_bytes(buffer: &mut Iter<u8>, count: usize) -> Result<Vec<u8>> {
    if buffer.len() < count {
        return Err(Error::Truncated);
    }
    Ok(buffer.by_ref().take(count).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libflate::zlib::Decoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut decoder = Decoder::new(data).unwrap();
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn crc_matches_known_values() {
        assert_eq!(Chunk::crc(b"IEND", &[]), IEND_CRC);
        // Standard CRC-32 check value.
        assert_eq!(crc32fast::hash(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn chunk_bytes_are_framed() {
        let chunk = Chunk::from_data(b"tEXt", b"abc").unwrap();
        let bytes = chunk.to_bytes();
        assert_eq!(bytes.len(), chunk.encoded_len());
        assert_eq!(&bytes[0..4], &[0, 0, 0, 3]);
        assert_eq!(&bytes[4..8], b"tEXt");
        assert_eq!(&bytes[8..11], b"abc");
        assert_eq!(&bytes[11..15], &Chunk::crc(b"tEXt", b"abc").to_be_bytes());
        assert!(chunk.check_crc());
    }

    #[test]
    fn rejects_bad_chunk_type() {
        assert!(matches!(
            Chunk::from_data(b"ID4T", &[]),
            Err(Error::InvalidChunkType(_))
        ));
    }

    #[test]
    fn length_limit_is_checked() {
        assert_eq!(checked_length(MAX_CHUNK_LEN).unwrap(), 0x7FFF_FFFF);
        assert!(matches!(
            checked_length(MAX_CHUNK_LEN + 1),
            Err(Error::ChunkTooLarge(n)) if n == MAX_CHUNK_LEN + 1
        ));
    }

    #[test]
    fn ihdr_fields_are_big_endian() {
        let ihdr = Ihdr::new(16, 16, 8, ColourType::RGBAlpha);
        assert_eq!(
            ihdr.to_bytes(),
            [0, 0, 0, 16, 0, 0, 0, 16, 8, 6, 0, 0, 0]
        );
        let chunk = ihdr.to_chunk().unwrap();
        assert_eq!(chunk.size, 13);
        assert_eq!(Ihdr::parse(&chunk).unwrap(), ihdr);
    }

    #[test]
    fn ihdr_crc_follows_dimensions() {
        for (w, h) in [(1, 1), (16, 16), (17, 3), (300, 200)] {
            let chunk = Ihdr::new(w, h, 8, ColourType::RGBAlpha).to_chunk().unwrap();
            let mut tagged = b"IHDR".to_vec();
            tagged.extend_from_slice(chunk.data());
            assert_eq!(crc32fast::hash(&tagged), chunk.crc);
        }
        let a = Ihdr::new(16, 16, 8, ColourType::RGBAlpha).to_chunk().unwrap();
        let b = Ihdr::new(32, 16, 8, ColourType::RGBAlpha).to_chunk().unwrap();
        assert_ne!(a.crc, b.crc);
    }

    #[test]
    fn invalid_headers() {
        assert!(Ihdr::new(0, 16, 8, ColourType::RGBAlpha).to_chunk().is_err());
        assert!(Ihdr::new(16, 16, 4, ColourType::RGB).to_chunk().is_err());
        let mut ihdr = Ihdr::new(16, 16, 8, ColourType::RGBAlpha);
        ihdr.interlace = 1;
        assert!(matches!(ihdr.validate(), Err(Error::InvalidHeader(_))));
        assert!(PNG::new(4, 4, 2, ColourType::GrayscaleAlpha).is_err());
    }

    #[test]
    fn palette_images_are_refused() {
        assert!(matches!(
            PNG::new(4, 4, 8, ColourType::Palette),
            Err(Error::InvalidHeader(_))
        ));
        assert!(matches!(
            Ihdr::new(4, 4, 8, ColourType::Palette).to_chunk(),
            Err(Error::InvalidHeader(_))
        ));
        let chunk = Chunk::from_data(
            b"IHDR",
            &[0, 0, 0, 4, 0, 0, 0, 4, 8, 3, 0, 0, 0],
        )
        .unwrap();
        assert!(Ihdr::parse(&chunk).is_err());
    }

    #[test]
    fn row_sizes() {
        assert_eq!(Ihdr::new(16, 1, 8, ColourType::RGBAlpha).bytes_per_row().unwrap(), 64);
        assert_eq!(Ihdr::new(9, 1, 1, ColourType::Grayscale).bytes_per_row().unwrap(), 2);
        assert_eq!(Ihdr::new(3, 1, 16, ColourType::RGB).bytes_per_row().unwrap(), 18);
    }

    #[test]
    fn idat_holds_filtered_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let chunk = idat_chunk(&rows).unwrap();
        assert_eq!(&chunk.name, b"IDAT");
        assert!(chunk.check_crc());
        assert_eq!(inflate(chunk.data()), vec![0, 1, 2, 3, 0, 4, 5, 6]);
    }

    #[test]
    fn icon_scanlines() {
        let icon = PNG::icon();
        let raw = inflate(icon.idat().unwrap().data());
        assert_eq!(raw.len(), 16 * 65);
        for line in raw.chunks(65) {
            assert_eq!(line[0], 0);
            for pixel in line[1..].chunks(4) {
                assert_eq!(pixel, &ICON_COLOUR);
            }
        }
    }

    #[test]
    fn iend_is_constant() {
        let iend = iend_chunk();
        assert_eq!(iend.size, 0);
        assert!(iend.check_crc());
        assert_eq!(
            iend.to_bytes(),
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn fill_matches_icon() {
        let mut png = PNG::new(ICON_SIZE, ICON_SIZE, 8, ColourType::RGBAlpha).unwrap();
        png.fill(ICON_COLOUR).unwrap();
        assert_eq!(png.to_bytes().unwrap(), PNG::icon().to_bytes().unwrap());

        let mut grey = PNG::new(2, 2, 8, ColourType::Grayscale).unwrap();
        assert!(grey.fill(ICON_COLOUR).is_err());
    }

    #[test]
    fn mismatched_rows_fail_before_output() {
        let mut png = PNG::icon();
        png.data[3].pop();
        assert!(matches!(png.to_bytes(), Err(Error::Encoding(_))));

        let mut png = PNG::icon();
        png.data.pop();
        assert!(matches!(png.to_bytes(), Err(Error::Encoding(_))));
    }

    #[test]
    fn reader_catches_corruption() {
        let mut bytes = PNG::icon().to_bytes().unwrap();
        // first byte of IHDR width
        bytes[16] ^= 0x01;
        assert!(matches!(
            read_chunks(&bytes),
            Err(Error::CrcMismatch { ref chunk, .. }) if chunk == "IHDR"
        ));

        let bytes = PNG::icon().to_bytes().unwrap();
        assert!(matches!(
            read_chunks(&bytes[..bytes.len() - 2]),
            Err(Error::Truncated)
        ));
        assert!(matches!(read_chunks(&bytes[1..]), Err(Error::InvalidSignature)));
    }

    fn assemble(chunks: &[Chunk]) -> Vec<u8> {
        let mut bytes = HEADER.to_vec();
        for chunk in chunks {
            bytes.extend_from_slice(&chunk.to_bytes());
        }
        bytes
    }

    #[test]
    fn reader_checks_chunk_order() {
        let ihdr = Ihdr::new(1, 1, 8, ColourType::RGBAlpha).to_chunk().unwrap();
        let idat = idat_chunk(&[ICON_COLOUR.to_vec()]).unwrap();

        assert_eq!(
            read_chunks(&assemble(&[ihdr.clone(), idat.clone(), iend_chunk()]))
                .unwrap()
                .len(),
            3
        );
        assert!(matches!(
            read_chunks(&assemble(&[idat.clone(), ihdr.clone(), iend_chunk()])),
            Err(Error::Malformed(_))
        ));
        assert!(matches!(
            read_chunks(&assemble(&[ihdr.clone(), idat.clone()])),
            Err(Error::Malformed(_))
        ));
        assert!(matches!(
            read_chunks(&assemble(&[ihdr, idat.clone(), iend_chunk(), idat])),
            Err(Error::Malformed(_))
        ));
        assert!(matches!(read_chunks(&HEADER), Err(Error::Malformed(_))));
    }

    #[test]
    fn debug_dump_is_readable() {
        let chunk = Chunk::from_data(b"IEND", &[]).unwrap();
        let text = format!("{:?}", chunk);
        assert!(text.contains("\"IEND\""));
        assert!(text.contains("AE426082"));
    }
}
