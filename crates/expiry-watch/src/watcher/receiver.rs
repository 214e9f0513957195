//! Read side of the output queue

use expiry_watch_core::ExpiredBatch;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Receiver for batches of expired items
///
/// Yields `None` once the poller has stopped and every queued batch
/// has been read.
#[derive(Debug)]
pub struct ExpiredReceiver {
    rx: mpsc::Receiver<ExpiredBatch>,
}

impl ExpiredReceiver {
    pub(crate) fn new(rx: mpsc::Receiver<ExpiredBatch>) -> Self {
        Self { rx }
    }

    /// Receive the next batch, or `None` once the queue is closed
    pub async fn recv(&mut self) -> Option<ExpiredBatch> {
        self.rx.recv().await
    }

    /// Receive without waiting
    pub fn try_recv(&mut self) -> Result<ExpiredBatch, ReceiveError> {
        self.rx.try_recv().map_err(|e| match e {
            TryRecvError::Empty => ReceiveError::Empty,
            TryRecvError::Disconnected => ReceiveError::Closed,
        })
    }

    /// Close the queue from the consumer side
    ///
    /// Batches already queued can still be read. The poller exits on its
    /// next delivery attempt.
    pub fn close(&mut self) {
        self.rx.close();
    }

    /// Unwrap the underlying tokio receiver
    pub fn into_inner(self) -> mpsc::Receiver<ExpiredBatch> {
        self.rx
    }
}

/// Error when receiving without waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveError {
    /// No batch is queued right now
    Empty,
    /// The poller has stopped and the queue is drained
    Closed,
}

impl std::fmt::Display for ReceiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiveError::Empty => write!(f, "no batch queued"),
            ReceiveError::Closed => write!(f, "channel closed"),
        }
    }
}

impl std::error::Error for ReceiveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use expiry_watch_core::ExpiredItem;

    #[tokio::test]
    async fn test_recv_until_closed() {
        let (tx, rx) = mpsc::channel(2);
        let mut receiver = ExpiredReceiver::new(rx);

        tx.send(vec![ExpiredItem::new(1, "a")]).await.unwrap();
        drop(tx);

        assert_eq!(receiver.recv().await, Some(vec![ExpiredItem::new(1, "a")]));
        assert_eq!(receiver.recv().await, None);
    }

    #[tokio::test]
    async fn test_try_recv() {
        let (tx, rx) = mpsc::channel(2);
        let mut receiver = ExpiredReceiver::new(rx);

        assert_eq!(receiver.try_recv(), Err(ReceiveError::Empty));

        tx.send(Vec::new()).await.unwrap();
        assert_eq!(receiver.try_recv(), Ok(Vec::new()));

        drop(tx);
        assert_eq!(receiver.try_recv(), Err(ReceiveError::Closed));
    }

    #[tokio::test]
    async fn test_close_rejects_sends() {
        let (tx, rx) = mpsc::channel(2);
        let mut receiver = ExpiredReceiver::new(rx);

        receiver.close();
        assert!(tx.reserve().await.is_err());
    }
}
