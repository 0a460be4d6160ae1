//! Types shared across the protocol engine.

use thiserror::Error;

/// Number of bytes in a tag identifier.
pub const TAG_ID_LEN: usize = 12;

/// Identifier of a single tag, copied verbatim out of an inventory response.
///
/// The bytes are opaque: they are never interpreted, only carried forward
/// into the isolate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagId([u8; TAG_ID_LEN]);

impl TagId {
    pub const fn new(bytes: [u8; TAG_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for TagId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Errors that can occur while driving the reader.
#[derive(Debug, Error)]
pub enum AntennaError {
    /// The serial device could not be opened or configured.
    #[error("error opening {path}: {detail}")]
    TransportOpen { path: String, detail: String },

    /// Read/write requested together with an inventory command.
    #[error("must choose either inventory commands or read and write, not both")]
    ConflictingOperations,

    /// No operation flag was selected.
    #[error("no command given")]
    NoOperation,

    /// Write requested without content.
    #[error("no data is given to write to tag")]
    MissingWriteContent,

    /// The write frame builder was handed empty content.
    #[error("write content is empty")]
    EmptyContent,

    /// Content does not fit the fixed command frame.
    #[error("write content of {len} bytes does not fit a command frame")]
    ContentTooLong { len: usize },

    /// A response ended before the bytes a parser needed.
    #[error("response too short: needed {needed} bytes, got {got}")]
    TruncatedResponse { needed: usize, got: usize },

    /// Transport layer error during an exchange.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Format bytes the way reader responses are displayed: lowercase hex, one
/// `0x`-prefixed pair per byte, space separated.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
