use expiry_watch_core::ExpirationBuffer;

/// Pending batches the output queue holds before the poller blocks
pub const DEFAULT_CHANNEL_CAPACITY: usize = 10;

/// Configuration for a [`Watcher`](super::Watcher)
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Offset applied to "now" when deciding expiry
    pub expiration_buffer: ExpirationBuffer,
    /// Output queue capacity in batches (raised to 1 if zero)
    pub channel_capacity: usize,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            expiration_buffer: ExpirationBuffer::None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl WatcherConfig {
    /// Create config with a specific expiration buffer
    pub fn with_buffer(expiration_buffer: ExpirationBuffer) -> Self {
        Self {
            expiration_buffer,
            ..Default::default()
        }
    }

    /// Set the output queue capacity
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    pub(crate) fn effective_capacity(&self) -> usize {
        self.channel_capacity.max(1)
    }
}
