use dashmap::DashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::mpsc;

pub type WsSender = mpsc::UnboundedSender<String>;

/// Registry of connected viewer sessions. Connections are added on upgrade
/// and removed on disconnect or send failure; broadcasts fan out to whoever
/// is present at that moment. No history, no replay.
#[derive(Clone)]
pub struct ReportHub {
    connections: Arc<DashMap<u64, WsSender>>,
    next_conn_id: Arc<AtomicU64>,
}

impl Default for ReportHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportHub {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(DashMap::new()),
            next_conn_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn subscribe(&self) -> (u64, mpsc::UnboundedReceiver<String>) {
        let conn_id = self.next_conn_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(conn_id, tx);
        (conn_id, rx)
    }

    pub fn unsubscribe(&self, conn_id: u64) {
        self.connections.remove(&conn_id);
    }

    /// Best-effort fan-out. A connection whose receiver is gone is pruned
    /// while sending; nothing is queued or retried.
    pub fn broadcast(&self, message: &str) {
        self.connections
            .retain(|_, sender| sender.send(message.to_string()).is_ok());
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
