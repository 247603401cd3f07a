//! `wildbytes` reads, decodes, modifies and re-emits the binary data of a
//! PS1-era RPG distributed on CD-ROM: its LZSS-compressed blocks, its
//! multi-variant text encoding, its archive containers, its bytecode
//! scripts, and — the reason the rest exists — its per-map data blocks,
//! which bundle a script, a jump table, relocatable MIPS machine code,
//! compressed sound, graphics, and the pointer tables that cross-reference
//! all of it.
//!
//! Disc image mounting, ISO-9660 lookup, PNG font-sheet encoding and any
//! command-line glue are deliberately out of scope; see [`source`] for the
//! trait boundary external collaborators are expected to satisfy.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod coords;
pub mod error;
pub mod version;

#[cfg(feature = "alloc")]
pub mod lzss;
#[cfg(feature = "alloc")]
pub mod text;
#[cfg(feature = "alloc")]
pub mod archive;
#[cfg(feature = "alloc")]
pub mod script;
#[cfg(feature = "alloc")]
pub mod mapdata;
#[cfg(feature = "alloc")]
pub mod data;
#[cfg(feature = "std")]
pub mod source;

pub use error::{Error, Result};
pub use version::Version;
