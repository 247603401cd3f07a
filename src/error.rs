//! Crate-wide error type.
//!
//! All fallible public functions return [`Result`]. Every variant carries
//! enough context (an offset, an instruction address, or the raw bytes
//! involved) to reconstruct the failure without re-running the operation.

use crate::alloc::string::String;
use core::fmt;
use core::result;

#[derive(Debug)]
pub enum Error {
    /// Propagated from the `scroll` read/write layer (buffer too short,
    /// bad alignment, etc).
    Scroll(scroll::Error),
    /// A structural assumption about the input was violated: a bad magic
    /// value, a pointer table that doesn't monotonically increase, a
    /// version that couldn't be identified, and so on.
    Malformed(String),
    /// An unrecognised MIPS instruction sequence was found inside a map's
    /// code window during relocation. Carries the offending three-word
    /// window and its byte offset for post-mortem inspection.
    UnrecognizedMips {
        offset: usize,
        words: [u32; 3],
    },
    /// A CALL instruction's target address was relocated to the reserved
    /// `0xFFFE` sentinel, which would change its meaning.
    ReservedCallTarget { addr: u16, new_addr: u16 },
    /// `getText`/`setText` was called on an instruction that isn't a
    /// MESSAGE or STRING pseudo-op.
    NotTextInstruction { disassembly: String },
    /// A control-code argument exceeded the number of decimal digits its
    /// declared argument length allows, or a US-encoded code point was
    /// >= 0x80.
    RangeError(String),
    /// Encoding was requested for Japanese text, which this crate only
    /// decodes.
    EncodingUnsupported(&'static str),
    /// The map's rewritten script region would overrun the fixed graphics
    /// anchor at offset 0x15000.
    Overrun { needed: usize, limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Scroll(e) => write!(f, "scroll error: {e}"),
            Error::Malformed(msg) => write!(f, "malformed entity: {msg}"),
            Error::UnrecognizedMips { offset, words } => write!(
                f,
                "unrecognized MIPS instruction sequence {:08x} {:08x} {:08x} at offset {:#x}",
                words[0], words[1], words[2], offset
            ),
            Error::ReservedCallTarget { addr, new_addr } => write!(
                f,
                "target address of CALL instruction at {addr:04x} relocated to reserved sentinel {new_addr:04x}"
            ),
            Error::NotTextInstruction { disassembly } => {
                write!(f, "getText()/setText() called for instruction {disassembly}")
            }
            Error::RangeError(msg) => write!(f, "value out of range: {msg}"),
            Error::EncodingUnsupported(what) => write!(f, "encoding not supported: {what}"),
            Error::Overrun { needed, limit } => {
                write!(f, "map data overrun: needed {needed:#x} bytes, limit is {limit:#x}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<scroll::Error> for Error {
    fn from(e: scroll::Error) -> Self {
        Error::Scroll(e)
    }
}

pub type Result<T> = result::Result<T, Error>;
