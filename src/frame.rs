//! Command frame construction.
//!
//! Every message sent to the reader is a fixed-capacity, zero-filled buffer
//! whose leading bytes come from a per-operation template. The templates are
//! the reader's vendor protocol and must match the wire byte for byte.

use crate::types::{AntennaError, TAG_ID_LEN, TagId};

/// Capacity of a command frame buffer.
pub const FRAME_CAPACITY: usize = 100;

/// Offset of the tag identifier inside an isolate frame.
const ISOLATE_ID_OFFSET: usize = 3;
/// Offset of the word-count byte inside a write frame.
const WORD_COUNT_OFFSET: usize = 8;
/// Offset of the first content byte inside a write frame. Bytes 4..8 are the
/// EPC access password and stay zero.
const PAYLOAD_OFFSET: usize = 9;

/// The four operations the reader understands, each with its fixed frame
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Inventory scan reporting signal strength.
    RssiInventory,
    /// Select a previously discovered tag for read/write targeting.
    Isolate,
    /// Read the isolated tag.
    Read,
    /// Write to the isolated tag.
    Write,
}

impl FrameKind {
    /// Leading template bytes for this operation.
    pub const fn template(self) -> &'static [u8] {
        match self {
            FrameKind::RssiInventory => &[0x43, 0x03, 0x01],
            FrameKind::Isolate => &[0x33, 0x0F, 0x0C],
            FrameKind::Read => &[0x37, 0x05, 0x01, 0x02, 0x06],
            FrameKind::Write => &[0x35, 0x15, 0x01, 0x02],
        }
    }

    /// Number of bytes put on the wire for this operation. Isolate and write
    /// transmit the whole zero-filled buffer; the reader relies on the
    /// trailing zeros.
    pub const fn wire_len(self) -> usize {
        match self {
            FrameKind::RssiInventory | FrameKind::Read => self.template().len(),
            FrameKind::Isolate | FrameKind::Write => FRAME_CAPACITY,
        }
    }
}

/// One protocol message: template bytes plus an operation-specific payload in
/// a zero-filled fixed buffer.
///
/// Invariant: bytes beyond the populated payload are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: [u8; FRAME_CAPACITY],
    wire_len: usize,
}

impl CommandFrame {
    fn new(kind: FrameKind) -> Self {
        let template = kind.template();
        let mut bytes = [0u8; FRAME_CAPACITY];
        bytes[..template.len()].copy_from_slice(template);
        Self {
            bytes,
            wire_len: kind.wire_len(),
        }
    }

    /// Bytes to put on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.wire_len]
    }

    /// RSSI inventory scan, no payload.
    pub fn rssi_inventory() -> Self {
        Self::new(FrameKind::RssiInventory)
    }

    /// Isolate the tag with the given identifier. The identifier lands
    /// verbatim at offset 3.
    pub fn isolate(tag: &TagId) -> Self {
        let mut frame = Self::new(FrameKind::Isolate);
        frame.bytes[ISOLATE_ID_OFFSET..ISOLATE_ID_OFFSET + TAG_ID_LEN].copy_from_slice(tag.as_ref());
        frame
    }

    /// Read the currently isolated tag.
    pub fn read() -> Self {
        Self::new(FrameKind::Read)
    }

    /// Write `content` to the currently isolated tag.
    ///
    /// The content is tokenized on single spaces and each token contributes
    /// its first byte to the payload, consecutively from offset 9. The
    /// word-count byte at offset 8 covers the raw content length, spaces
    /// included, not the token count; the reader's firmware expects exactly
    /// this arithmetic.
    pub fn write(content: &str) -> Result<Self, AntennaError> {
        if content.is_empty() {
            return Err(AntennaError::EmptyContent);
        }
        let word_count = u8::try_from(word_count(content.len()))
            .map_err(|_| AntennaError::ContentTooLong { len: content.len() })?;

        let mut frame = Self::new(FrameKind::Write);
        frame.bytes[WORD_COUNT_OFFSET] = word_count;

        let mut offset = PAYLOAD_OFFSET;
        for token in content.split(' ') {
            let Some(&byte) = token.as_bytes().first() else {
                continue;
            };
            if offset >= FRAME_CAPACITY {
                return Err(AntennaError::ContentTooLong { len: content.len() });
            }
            frame.bytes[offset] = byte;
            offset += 1;
        }
        Ok(frame)
    }
}

/// Raw content length rounded up to whole 2-byte words.
fn word_count(len: usize) -> usize {
    if len % 2 == 0 { len / 2 } else { (len + 1) / 2 }
}
