use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Compression failed or the pixel rows do not fit the header.
    #[error("PNG encoding failed: {0}")]
    Encoding(String),

    /// Payload longer than a chunk length field may carry.
    #[error("Chunk payload of {0} bytes exceeds the 2^31-1 byte limit")]
    ChunkTooLarge(usize),

    #[error("Invalid chunk type: {0:02X?}")]
    InvalidChunkType([u8; 4]),

    #[error("Invalid IHDR: {0}")]
    InvalidHeader(String),

    #[error("Missing PNG signature")]
    InvalidSignature,

    #[error("Data ended inside a chunk")]
    Truncated,

    #[error("CRC mismatch in {chunk} chunk: stored {stored:08X}, computed {computed:08X}")]
    CrcMismatch {
        chunk: String,
        stored: u32,
        computed: u32,
    },

    #[error("Malformed chunk: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
