//! Builds small PNG files by hand: signature, IHDR, a single zlib
//! compressed IDAT and IEND, every chunk carrying a computed CRC-32.
//!
//! ```no_run
//! let icon = png_icon::PNG::icon();
//! icon.save("icon.png")?;
//! # Ok::<(), png_icon::Error>(())
//! ```

pub mod error;
pub mod structs;

pub use error::{Error, Result};
pub use structs::{
    iend_chunk, idat_chunk, read_chunks, signature, write_bytes, Chunk, ColourType, Data, Ihdr,
    HEADER, ICON_COLOUR, ICON_SIZE, PNG,
};
