//! Transport backends and the response collection loop.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::types::AntennaError;

/// Capacity of the per-exchange response buffer.
pub const RESPONSE_CAPACITY: usize = 1000;

/// Driver-level read timeout handed to the backend on every read.
pub const READ_TIMEOUT_MS: u32 = 500;

/// Trait for reader communication backends.
/// Implement this trait for different transports (serial port, mock, etc.)
pub trait ReaderTransport {
    /// Error type for transport operations
    type Error: std::fmt::Debug;

    /// Write data to the transport
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Read data from the transport with a timeout in milliseconds
    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;
}

/// When to consider an exchange complete.
///
/// The reader offers no framing that marks a response as finished, so
/// completion is inferred from reads that return no data. A `max_idle_reads`
/// of 1 ends the exchange on the first empty read.
#[derive(Debug, Clone)]
pub struct RecvPolicy {
    /// Pause after every read attempt.
    pub poll_interval: Duration,
    /// Empty reads that end the exchange. Not reset by intervening data.
    pub max_idle_reads: u32,
}

impl Default for RecvPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_idle_reads: 1,
        }
    }
}

/// Send one frame and collect whatever the reader returns.
///
/// Every non-empty chunk is handed to `on_chunk` as it arrives, then appended
/// to the returned buffer, capped at [`RESPONSE_CAPACITY`]. The exchange ends
/// once `policy.max_idle_reads` reads come back empty; an unresponsive reader
/// therefore looks identical to one that answered and went idle.
pub fn exchange<T, F>(
    transport: &mut T,
    frame: &[u8],
    policy: &RecvPolicy,
    mut on_chunk: F,
) -> Result<Vec<u8>, AntennaError>
where
    T: ReaderTransport,
    F: FnMut(&[u8]),
{
    debug!("sending frame: {:02X?}", frame);
    transport
        .write(frame)
        .map_err(|e| AntennaError::Transport(format!("{e:?}")))?;

    let mut collected = Vec::new();
    let mut idle_reads = 0;
    let mut buf = [0u8; RESPONSE_CAPACITY];

    loop {
        let n = transport
            .read(&mut buf, READ_TIMEOUT_MS)
            .map_err(|e| AntennaError::Transport(format!("{e:?}")))?;

        if n > 0 {
            on_chunk(&buf[..n]);
            let room = RESPONSE_CAPACITY - collected.len();
            collected.extend_from_slice(&buf[..n.min(room)]);
        }

        thread::sleep(policy.poll_interval);

        if n == 0 {
            idle_reads += 1;
            if idle_reads >= policy.max_idle_reads {
                break;
            }
        }
    }

    debug!("collected {} bytes", collected.len());
    Ok(collected)
}
