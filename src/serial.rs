//! Serial port transport for desktop using serialport crate

use std::time::Duration;

use crate::transport::ReaderTransport;

/// Device path the reader usually shows up on.
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Line rate the reader ships with.
pub const BAUD_RATE: u32 = 9600;

pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open `port_name` at 9600 baud, 8 data bits, no parity, one stop bit,
    /// no flow control.
    pub fn open(port_name: &str) -> Result<Self, serialport::Error> {
        let port = serialport::new(port_name, BAUD_RATE)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(500))
            .open()?;

        Ok(Self { port })
    }
}

impl ReaderTransport for SerialTransport {
    type Error = std::io::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.port, data)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error> {
        self.port
            .set_timeout(Duration::from_millis(u64::from(timeout_ms)))
            .map_err(std::io::Error::other)?;
        // A timed-out read means "no data", which the collection loop uses as
        // its completion signal.
        match std::io::Read::read(&mut self.port, buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }
}
