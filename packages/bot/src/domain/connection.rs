//! Connection lifecycle state machine.
//!
//! Pure bookkeeping for the reconnect loop in `crate::runner`: it decides
//! whether a join should be sent and whether a reconnect must be scheduled,
//! but never performs I/O or sleeps itself.

/// Connection state of the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Joined,
    /// Explicit shutdown; terminal
    Closing,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    state: ConnectionState,
    reconnect_pending: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    #[cfg(test)]
    pub fn is_reconnect_pending(&self) -> bool {
        self.reconnect_pending
    }

    /// Disconnected → Connecting.
    ///
    /// Returns `false` (and changes nothing) from any other state, which makes
    /// a stale reconnect trigger a no-op.
    pub fn start(&mut self) -> bool {
        if self.state != ConnectionState::Disconnected {
            return false;
        }
        self.state = ConnectionState::Connecting;
        true
    }

    /// The transport reported the connection as open.
    ///
    /// Returns `true` when the caller should send the join request.
    pub fn on_open(&mut self) -> bool {
        if self.state != ConnectionState::Connecting {
            return false;
        }
        self.state = ConnectionState::Joined;
        true
    }

    /// The connection closed (or failed to open).
    ///
    /// Returns `true` when a reconnect must be scheduled. At most one reconnect
    /// is pending at a time, and none is scheduled once shutdown began.
    pub fn on_close(&mut self) -> bool {
        if self.state == ConnectionState::Closing {
            return false;
        }
        self.state = ConnectionState::Disconnected;
        if self.reconnect_pending {
            return false;
        }
        self.reconnect_pending = true;
        true
    }

    /// The reconnect delay elapsed. Returns `true` when a new attempt starts.
    pub fn on_reconnect_timer(&mut self) -> bool {
        self.reconnect_pending = false;
        self.start()
    }

    /// Any state → Closing
    pub fn shutdown(&mut self) {
        self.state = ConnectionState::Closing;
        self.reconnect_pending = false;
    }
}
