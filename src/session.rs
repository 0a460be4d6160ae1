//! The session sequencer: orders inventory, isolation, and tag operations.

use log::debug;

use crate::frame::CommandFrame;
use crate::response;
use crate::transport::{ReaderTransport, RecvPolicy, exchange};
use crate::types::{AntennaError, TagId};

/// What the caller asked the reader to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read the tag in range and display its response.
    Read,
    /// Write content to the tag in range.
    Write,
    /// Inventory scan, display only.
    Inventory,
    /// Inventory scan with signal strength, display only.
    InventoryRssi,
}

/// Validated, immutable description of one controller run.
///
/// Constructed once from the command-line flags; every fatal flag
/// combination is rejected here, before any frame is sent.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    operation: Operation,
    content: Option<String>,
}

impl SessionConfig {
    /// Validate a set of requested flags into a single runnable operation.
    ///
    /// Read/write and the inventory commands are mutually exclusive, as are
    /// read and write themselves, and write requires content.
    pub fn from_flags(
        read: bool,
        write: bool,
        inventory: bool,
        inventory_rssi: bool,
        content: Option<String>,
    ) -> Result<Self, AntennaError> {
        if (read || write) && (inventory || inventory_rssi) {
            return Err(AntennaError::ConflictingOperations);
        }
        if read && write {
            return Err(AntennaError::ConflictingOperations);
        }

        let operation = if read {
            Operation::Read
        } else if write {
            Operation::Write
        } else if inventory_rssi {
            Operation::InventoryRssi
        } else if inventory {
            Operation::Inventory
        } else {
            return Err(AntennaError::NoOperation);
        };

        if operation == Operation::Write && content.is_none() {
            return Err(AntennaError::MissingWriteContent);
        }

        Ok(Self { operation, content })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Progress of the chained exchange. Transitions happen only after the prior
/// step's response has been read; there is no rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InventoryDone,
    IsolateDone,
    ActionDone,
}

/// Result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Response bytes were displayed (read and inventory operations).
    Displayed,
    /// Write completed; true if the reader acknowledged it.
    WriteAcked(bool),
}

/// Drives the reader through one full command sequence.
pub struct Session<T: ReaderTransport> {
    transport: T,
    policy: RecvPolicy,
    state: SessionState,
}

impl<T: ReaderTransport> Session<T> {
    /// Create a session with the default receive policy.
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RecvPolicy::default())
    }

    pub fn with_policy(transport: T, policy: RecvPolicy) -> Self {
        Self {
            transport,
            policy,
            state: SessionState::Idle,
        }
    }

    /// Current position in the exchange chain.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the configured operation to completion.
    ///
    /// `on_chunk` receives every non-empty response chunk of the display
    /// operations (read and the inventory scans) as it arrives.
    pub fn run<F>(
        &mut self,
        config: &SessionConfig,
        mut on_chunk: F,
    ) -> Result<SessionOutcome, AntennaError>
    where
        F: FnMut(&[u8]),
    {
        match config.operation() {
            Operation::Inventory | Operation::InventoryRssi => {
                // Inventory-only requests skip isolation entirely. The reader
                // knows a single inventory opcode, the RSSI variant.
                exchange(
                    &mut self.transport,
                    CommandFrame::rssi_inventory().as_bytes(),
                    &self.policy,
                    &mut on_chunk,
                )?;
                self.state = SessionState::ActionDone;
                Ok(SessionOutcome::Displayed)
            }
            Operation::Read => {
                let id = self.discover()?;
                self.isolate(&id)?;
                exchange(
                    &mut self.transport,
                    CommandFrame::read().as_bytes(),
                    &self.policy,
                    &mut on_chunk,
                )?;
                self.state = SessionState::ActionDone;
                Ok(SessionOutcome::Displayed)
            }
            Operation::Write => {
                let content = config
                    .content()
                    .ok_or(AntennaError::MissingWriteContent)?;
                let id = self.discover()?;
                self.isolate(&id)?;
                let frame = CommandFrame::write(content)?;
                let resp = exchange(&mut self.transport, frame.as_bytes(), &self.policy, |_| {})?;
                self.state = SessionState::ActionDone;
                Ok(SessionOutcome::WriteAcked(response::found_ack(&resp)))
            }
        }
    }

    /// Tag operations always rediscover the tag: an inventory scan comes
    /// first, whatever the caller asked for.
    fn discover(&mut self) -> Result<TagId, AntennaError> {
        let resp = exchange(
            &mut self.transport,
            CommandFrame::rssi_inventory().as_bytes(),
            &self.policy,
            |_| {},
        )?;
        let id = response::extract_tag_id(&resp)?;
        debug!("discovered tag {:02X?}", id.as_ref());
        self.state = SessionState::InventoryDone;
        Ok(id)
    }

    fn isolate(&mut self, id: &TagId) -> Result<(), AntennaError> {
        exchange(
            &mut self.transport,
            CommandFrame::isolate(id).as_bytes(),
            &self.policy,
            |_| {},
        )?;
        self.state = SessionState::IsolateDone;
        Ok(())
    }
}
