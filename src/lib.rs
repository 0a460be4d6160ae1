//! Controller for a vendor UHF RFID reader attached over a serial link.
//!
//! The reader understands four operations: an RSSI inventory scan, tag
//! isolation, tag read, and tag write. Read and write only work against an
//! isolated tag, so the session sequencer always chains
//! inventory → isolate → action, carrying the tag identifier extracted from
//! the inventory response into the isolate frame.
//!
//! # Features
//!
//! - `serial` - Serial port transport using the serialport crate (default)
//!
//! # Example
//!
//! ```ignore
//! use antenna::{Session, SessionConfig, SerialTransport, hex_dump};
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0")?;
//! let config = SessionConfig::from_flags(true, false, false, false, None)?;
//!
//! let mut session = Session::new(transport);
//! session.run(&config, |chunk| println!("{}", hex_dump(chunk)))?;
//! ```

mod frame;
mod response;
mod session;
mod transport;
mod types;

#[cfg(feature = "serial")]
mod serial;

// Re-exports
pub use frame::{CommandFrame, FRAME_CAPACITY, FrameKind};
pub use response::{ACK, TAG_ID_OFFSET, extract_tag_id, found_ack};
pub use session::{Operation, Session, SessionConfig, SessionOutcome, SessionState};
pub use transport::{READ_TIMEOUT_MS, RESPONSE_CAPACITY, ReaderTransport, RecvPolicy, exchange};
pub use types::{AntennaError, TAG_ID_LEN, TagId, hex_dump};

#[cfg(feature = "serial")]
pub use serial::{BAUD_RATE, DEFAULT_PORT, SerialTransport};
