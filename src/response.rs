//! Extraction of results from raw reader responses.

use crate::types::{AntennaError, TAG_ID_LEN, TagId};

/// Byte offset of the tag identifier inside an inventory response.
pub const TAG_ID_OFFSET: usize = 9;

/// Status byte the reader echoes after a successful write.
pub const ACK: u8 = 0x06;

/// Copy the 12-byte tag identifier out of an inventory response.
///
/// The identifier sits at a fixed offset; a response shorter than
/// offset + length holds no usable identifier and is rejected.
pub fn extract_tag_id(response: &[u8]) -> Result<TagId, AntennaError> {
    let needed = TAG_ID_OFFSET + TAG_ID_LEN;
    if response.len() < needed {
        return Err(AntennaError::TruncatedResponse {
            needed,
            got: response.len(),
        });
    }
    let mut id = [0u8; TAG_ID_LEN];
    id.copy_from_slice(&response[TAG_ID_OFFSET..needed]);
    Ok(TagId::new(id))
}

/// True if the reader acknowledged a write anywhere in `response`.
pub fn found_ack(response: &[u8]) -> bool {
    response.contains(&ACK)
}
